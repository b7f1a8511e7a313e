use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;
use std::{env, fs};

use toml_edit::{Document, Item, Table};

/// Name of the facade crate that re-exports every `jsonic_*` crate.
const FACADE: &str = "jsonic";

/// Dependency tables searched, in order.
const DEPENDENCY_TABLES: [&str; 2] = ["dependencies", "dev-dependencies"];

/// The parsed Cargo.toml of the crate currently being compiled.
///
/// Derived code refers to items of `jsonic_reflect`. Users may depend on
/// that crate directly or only on the `jsonic` facade, so the derive asks
/// the manifest which spelling is reachable:
///
/// ```rust
/// # use jsonic_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("jsonic_reflect"));
/// ```
///
/// For each of `dependencies` and `dev-dependencies`:
///
/// - a direct dependency on `name` resolves to `::name`,
/// - a dependency on `jsonic` resolves `jsonic_xxx` to `::jsonic::xxx`.
///
/// When neither table matches, `::name` is returned. A crate deriving on its
/// own types needs `extern crate self as name;` for that path to resolve.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

impl Manifest {
    /// Run `func` against the manifest of the current crate.
    ///
    /// Parsed manifests are cached by path and re-read once the file's
    /// modification time moves.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static CACHE: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = manifest_path();
        let modified_time = fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .unwrap_or_else(|err| panic!("cannot stat {}: {err}", path.display()));

        {
            let cache = CACHE.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(cached) = cache.get(&path)
                && cached.modified_time == modified_time
            {
                return func(cached);
            }
        }

        let source = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
        let manifest = Manifest {
            manifest: Document::parse(source.into_boxed_str())
                .unwrap_or_else(|err| panic!("invalid manifest {}: {err}", path.display())),
            modified_time,
        };

        let result = func(&manifest);
        CACHE
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);
        result
    }

    /// The path under which the crate `name` is reachable from the current
    /// crate.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        DEPENDENCY_TABLES
            .iter()
            .filter_map(|table| match self.manifest.get(table) {
                Some(Item::Table(deps)) => resolve_in(deps, name),
                _ => None,
            })
            .next()
            .unwrap_or_else(|| absolute_path(&[name]))
    }
}

fn manifest_path() -> PathBuf {
    let Some(dir) = env::var_os("CARGO_MANIFEST_DIR") else {
        panic!("CARGO_MANIFEST_DIR is not set, the macro must be expanded by cargo");
    };
    PathBuf::from(dir).join("Cargo.toml")
}

fn resolve_in(deps: &Table, name: &str) -> Option<syn::Path> {
    if deps.contains_key(name) {
        return Some(absolute_path(&[name]));
    }
    let short = name.strip_prefix("jsonic_")?;
    deps.contains_key(FACADE).then(|| absolute_path(&[FACADE, short]))
}

fn absolute_path(segments: &[&str]) -> syn::Path {
    let mut path = syn::Path {
        leading_colon: Some(Default::default()),
        segments: Default::default(),
    };
    for segment in segments {
        path.segments
            .push(syn::Ident::new(segment, proc_macro2::Span::call_site()).into());
    }
    path
}

#[cfg(test)]
mod tests {
    use super::resolve_in;

    fn render(path: &syn::Path) -> String {
        let mut out = String::new();
        for segment in &path.segments {
            out.push_str("::");
            out.push_str(&segment.ident.to_string());
        }
        out
    }

    fn deps(src: &str) -> toml_edit::Table {
        let doc: toml_edit::DocumentMut = src.parse().unwrap();
        doc.as_table().clone()
    }

    #[test]
    fn direct_dependency_wins() {
        let table = deps("jsonic_reflect = \"0.0.1\"\njsonic = \"0.0.1\"\n");
        let path = resolve_in(&table, "jsonic_reflect").unwrap();
        assert_eq!(render(&path), "::jsonic_reflect");
        assert!(path.leading_colon.is_some());
    }

    #[test]
    fn facade_maps_short_name() {
        let table = deps("jsonic = { version = \"0.0.1\", features = [\"chrono\"] }\n");
        let path = resolve_in(&table, "jsonic_reflect").unwrap();
        assert_eq!(render(&path), "::jsonic::reflect");
    }

    #[test]
    fn unrelated_crates_are_not_resolved() {
        let table = deps("serde = \"1\"\njsonic = \"0.0.1\"\n");
        assert!(resolve_in(&table, "serde_json").is_none());
        assert!(resolve_in(&deps("serde = \"1\"\n"), "jsonic_reflect").is_none());
    }
}
