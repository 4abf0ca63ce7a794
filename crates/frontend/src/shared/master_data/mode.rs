//! URL path ⇄ page mode.

use contracts::domain::common::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    New,
    Edit(RecordId),
}

/// `base` → List, `base/new` → New, `base/edit/:id` → Edit. Trailing
/// slashes are ignored; any other path (bad id included) is `None`.
pub fn resolve(base: &str, path: &str) -> Option<Mode> {
    let base = base.trim_end_matches('/');
    let path = path.trim_end_matches('/');
    let rest = path.strip_prefix(base)?;
    if rest.is_empty() {
        return Some(Mode::List);
    }
    let rest = rest.strip_prefix('/')?;
    match rest.split('/').collect::<Vec<_>>().as_slice() {
        ["new"] => Some(Mode::New),
        ["edit", id] => {
            let id = urlencoding::decode(id).ok()?;
            id.parse::<RecordId>().ok().map(Mode::Edit)
        }
        _ => None,
    }
}

pub fn list_path(base: &str) -> String {
    base.to_string()
}

pub fn new_path(base: &str) -> String {
    format!("{}/new", base)
}

pub fn edit_path(base: &str, id: RecordId) -> String {
    format!("{}/edit/{}", base, urlencoding::encode(&id.as_string()))
}

/// Client-side navigation to an in-app path.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

/// The only way a page changes mode: every transition is a URL transition.
#[derive(Debug, Clone)]
pub struct ModeRouter<N> {
    base: &'static str,
    navigator: N,
}

impl<N: Navigate> ModeRouter<N> {
    pub fn new(base: &'static str, navigator: N) -> Self {
        Self { base, navigator }
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    pub fn go_to_list(&self) {
        self.navigator.navigate(&list_path(self.base));
    }

    pub fn go_to_new(&self) {
        self.navigator.navigate(&new_path(self.base));
    }

    pub fn go_to_edit(&self, id: RecordId) {
        self.navigator.navigate(&edit_path(self.base, id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("/brands", "/brands"), Some(Mode::List));
        assert_eq!(resolve("/brands", "/brands/"), Some(Mode::List));
        assert_eq!(resolve("/brands", "/brands/new"), Some(Mode::New));
        assert_eq!(
            resolve("/brands", "/brands/edit/12/"),
            Some(Mode::Edit(RecordId(12)))
        );
    }

    #[test]
    fn test_resolve_rejects_other_paths() {
        assert_eq!(resolve("/brands", "/brands/edit/abc"), None);
        assert_eq!(resolve("/brands", "/brands/edit"), None);
        assert_eq!(resolve("/brands", "/brands/new/extra"), None);
        assert_eq!(resolve("/brands", "/brandsx"), None);
        assert_eq!(resolve("/brands", "/makes"), None);
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Navigate for Recorder {
        fn navigate(&self, path: &str) {
            self.0.borrow_mut().push(path.to_string());
        }
    }

    #[test]
    fn test_router_paths_round_trip() {
        let recorder = Recorder::default();
        let router = ModeRouter::new("/items", recorder.clone());
        router.go_to_new();
        router.go_to_edit(RecordId(42));
        router.go_to_list();

        let paths = recorder.0.borrow().clone();
        assert_eq!(paths, ["/items/new", "/items/edit/42", "/items"]);
        let modes: Vec<_> = paths.iter().map(|p| resolve("/items", p)).collect();
        assert_eq!(
            modes,
            [Some(Mode::New), Some(Mode::Edit(RecordId(42))), Some(Mode::List)]
        );
    }
}
