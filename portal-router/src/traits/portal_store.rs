/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::path::{Path, PathBuf};

/// The substrate portal directories are searched on.
///
/// [`FsStore`](crate::common::FsStore) answers these queries from the local
/// filesystem; tests and embedded hosts may answer them from memory.
pub trait PortalStore: Send + Sync {
    /// Returns `true` if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Lists the directories directly under `path`, sorted by path.
    ///
    /// Returns an empty list when `path` does not exist.
    fn list_dirs(&self, path: &Path) -> Vec<PathBuf>;
}
