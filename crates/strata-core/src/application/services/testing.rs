//! In-crate fakes for service tests.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Ports, TemplateRenderer, TemplateSource, Toolchain},
    },
    domain::{DomainError, RenderContext, SourceEntry},
    error::StrataResult,
};

pub struct FakeSource {
    files: BTreeMap<String, Vec<u8>>,
}

impl FakeSource {
    pub fn new(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(path, body)| (path.to_string(), body.as_bytes().to_vec()))
                .collect(),
        }
    }

    pub fn from_bytes(files: &[(&str, &[u8])]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(path, body)| (path.to_string(), body.to_vec()))
                .collect(),
        }
    }
}

impl TemplateSource for FakeSource {
    fn read_dir(&self, path: &str) -> StrataResult<Vec<SourceEntry>> {
        let prefix = format!("{path}/");
        let mut entries = BTreeSet::new();
        for key in self.files.keys() {
            if let Some(rest) = key.strip_prefix(&prefix) {
                match rest.split_once('/') {
                    Some((dir, _)) => entries.insert(SourceEntry::directory(dir)),
                    None => entries.insert(SourceEntry::file(rest)),
                };
            }
        }
        if entries.is_empty() {
            return Err(DomainError::MissingTemplateRoot { root: path.into() }.into());
        }
        Ok(entries.into_iter().collect())
    }

    fn read_file(&self, path: &str) -> StrataResult<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::TemplateSource {
                path: path.into(),
                reason: "no such file".into(),
            }
            .into()
        })
    }
}

/// Replaces the four `{{Field}}` tokens; anything else left in braces fails.
pub struct FakeRenderer;

impl TemplateRenderer for FakeRenderer {
    fn render(&self, name: &str, source: &str, ctx: &RenderContext) -> StrataResult<String> {
        let out = source
            .replace("{{Project}}", ctx.project())
            .replace("{{Module}}", ctx.module())
            .replace("{{ContextP}}", ctx.context_pascal())
            .replace("{{Context}}", ctx.context());
        if out.contains("{{") {
            return Err(ApplicationError::RenderingFailed {
                template: name.into(),
                reason: "unknown field".into(),
            }
            .into());
        }
        Ok(out)
    }
}

#[derive(Default)]
pub struct FakeFilesystem {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
}

impl FakeFilesystem {
    pub fn bytes(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    pub fn text(&self, path: &str) -> Option<String> {
        self.bytes(path).map(|b| String::from_utf8(b).unwrap())
    }

    pub fn has_file(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(Path::new(path))
    }

    pub fn has_dir(&self, path: &str) -> bool {
        self.dirs.lock().unwrap().contains(Path::new(path))
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl Filesystem for FakeFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> StrataResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> StrataResult<Option<String>> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .get(path)
            .map(|b| String::from_utf8_lossy(b).into_owned()))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.dirs.lock().unwrap().contains(path)
    }
}

/// Records every call as a short string, e.g. `tidy shop`.
#[derive(Default)]
pub struct FakeToolchain {
    calls: Mutex<Vec<String>>,
}

impl FakeToolchain {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> StrataResult<()> {
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

impl Toolchain for FakeToolchain {
    fn init(&self, dir: &Path, module: &str) -> StrataResult<()> {
        self.record(format!("init {} {module}", dir.display()))
    }

    fn tidy(&self, dir: &Path) -> StrataResult<()> {
        self.record(format!("tidy {}", dir.display()))
    }

    fn require(&self, dir: &Path, coordinate: &str) -> StrataResult<()> {
        self.record(format!("require {} {coordinate}", dir.display()))
    }

    fn replace(&self, dir: &Path, module: &str, local_path: &Path) -> StrataResult<()> {
        self.record(format!(
            "replace {} {module}={}",
            dir.display(),
            local_path.display()
        ))
    }
}

pub fn ports_with(source: FakeSource, fs: Arc<FakeFilesystem>) -> Ports {
    ports_with_toolchain(source, fs, Arc::new(FakeToolchain::default()))
}

pub fn ports_with_toolchain(
    source: FakeSource,
    fs: Arc<FakeFilesystem>,
    toolchain: Arc<dyn Toolchain>,
) -> Ports {
    Ports::new(Arc::new(source), Arc::new(FakeRenderer), fs, toolchain)
}
