use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for another crate as seen from the
/// caller's Cargo.toml.
///
/// Generated code must name crates the way the invoking crate can see them,
/// so a derive in `vc_reflect` may have to emit `::vc_copy::reflect::...`
/// instead of `::vc_reflect::...`.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_reflect"));
/// ```
///
/// Reading the manifest is not free, callers should resolve a path once per
/// macro invocation and pass it around.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `vc_` and the caller depends on
///    the facade crate `vc_copy`, return `::vc_copy::short_name`
///    (e.g. `vc_reflect` -> `::vc_copy::reflect`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// A missing or unreadable manifest also falls back to `::crate_name`.
///
/// ## Note
///
/// A crate that derives its own traits should add
/// `extern crate self as vc_reflect;` so the absolute path also works inside it.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Option<Document<Box<str>>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "vc_copy";
const CRATE_PREFIX: &str = "vc_";

impl Manifest {
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        path.exists().then_some(path)
    }

    fn modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
    }

    fn read(path: &Path, modified_time: SystemTime) -> Option<Self> {
        let text = std::fs::read_to_string(path).ok()?.into_boxed_str();
        let manifest = Document::parse(text).ok()?;
        Some(Self {
            manifest: Some(manifest),
            modified_time,
        })
    }

    fn absolute(name: &str) -> syn::Path {
        let ident = syn::Ident::new(name, proc_macro2::Span::call_site());
        let mut path = syn::Path::from(ident);
        path.leading_colon = Some(Default::default());
        path
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(name));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if !deps.contains_key(FACADE_NAME) {
            return None;
        }

        let mut path = Self::absolute(FACADE_NAME);
        path.segments.push(syn::PathSegment::from(syn::Ident::new(
            module,
            proc_macro2::Span::call_site(),
        )));
        Some(path)
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the type-level documentation for the rules.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        let Some(manifest) = &self.manifest else {
            return Self::absolute(name);
        };

        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|table| match manifest.get(table) {
                Some(Item::Table(deps)) => Some(deps),
                _ => None,
            })
            .find_map(|deps| Self::find_in_deps(deps, name))
            .unwrap_or_else(|| Self::absolute(name))
    }

    /// Run `func` with the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// Parsed manifests are cached per path and re-read when the file changes.
    /// If no manifest can be read, `func` sees one without dependencies.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = Self::manifest_path() else {
            return func(&Self::empty());
        };
        let Some(modified_time) = Self::modified_time(&path) else {
            return func(&Self::empty());
        };

        {
            let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = manifests.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let Some(manifest) = Self::read(&path, modified_time) else {
            return func(&Self::empty());
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }

    const fn empty() -> Self {
        Self {
            manifest: None,
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use quote::ToTokens;
    use toml_edit::Document;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Some(Document::parse(Box::from(text)).unwrap()),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    fn path_of(manifest: &Manifest, name: &str) -> String {
        manifest.get_crate_path(name).to_token_stream().to_string()
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nvc_reflect = \"0.0.1\"\n");
        assert_eq!(path_of(&m, "vc_reflect"), ":: vc_reflect");
    }

    #[test]
    fn through_facade() {
        let m = manifest("[dependencies]\nvc_copy = \"0.0.1\"\n");
        assert_eq!(path_of(&m, "vc_reflect"), ":: vc_copy :: reflect");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let m = manifest("[dev-dependencies]\nvc_copy = \"0.0.1\"\n");
        assert_eq!(path_of(&m, "vc_convert"), ":: vc_copy :: convert");
        assert_eq!(path_of(&m, "serde"), ":: serde");
    }
}
