use std::fs;
use std::sync::{Arc, Mutex};

use crumbbar_widgets::bar::{Activation, BreadcrumbBar};
use crumbbar_widgets::listing::list_folders;
use crumbbar_widgets::popup::{FolderPopup, PopupMenuItem, NO_FOLDERS_LABEL};

#[test]
fn test_list_folders_sorted_without_hidden() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("beta")).unwrap();
    fs::create_dir(dir.path().join("Alpha")).unwrap();
    fs::create_dir(dir.path().join(".hidden")).unwrap();
    fs::write(dir.path().join("file.txt"), "not a folder").unwrap();

    let folders = list_folders(dir.path());

    let names: Vec<&str> = folders.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "beta"]);
    assert_eq!(folders[0].path, dir.path().join("Alpha"));
}

#[test]
fn test_list_folders_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    assert!(list_folders(&missing).is_empty());
}

#[test]
fn test_list_folders_on_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();

    assert!(list_folders(&file).is_empty());
}

#[test]
fn test_popup_menu_items_fire_selection() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("projects")).unwrap();

    let popup = FolderPopup::for_path(dir.path());
    assert!(!popup.is_empty());

    let selected = Arc::new(Mutex::new(Vec::new()));
    let sink = selected.clone();
    let items = popup.menu_items(Arc::new(move |path: &str| {
        sink.lock().unwrap().push(path.to_string());
    }));

    assert_eq!(items.len(), 1);
    match &items[0] {
        PopupMenuItem::Action { label, action } => {
            assert_eq!(label, "projects");
            action();
        },
        PopupMenuItem::Disabled { .. } => panic!("expected an action entry"),
    }

    let expected = dir.path().join("projects").to_string_lossy().into_owned();
    assert_eq!(*selected.lock().unwrap(), vec![expected]);
}

#[test]
fn test_empty_popup_has_disabled_placeholder() {
    let dir = tempfile::tempdir().unwrap();

    let popup = FolderPopup::for_path(dir.path());
    let items = popup.menu_items(Arc::new(|_| {}));

    assert_eq!(items.len(), 1);
    match &items[0] {
        PopupMenuItem::Disabled { label } => assert_eq!(label, NO_FOLDERS_LABEL),
        PopupMenuItem::Action { .. } => panic!("expected a disabled entry"),
    }
}

#[test]
fn test_popup_flow_from_bar() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let root = dir.path().to_string_lossy().into_owned();

    let mut bar = BreadcrumbBar::new();
    bar.set_path(&root);

    // The current crumb is always the last item.
    let current_index = bar.items().len() - 1;
    let activation = bar.click(current_index).unwrap();
    let popup_path = match activation {
        Activation::PopupRequested(path) => path,
        other => panic!("expected popup request, got {other:?}"),
    };
    assert_eq!(popup_path, root);

    let popup = bar.open_popup(&popup_path);
    assert_eq!(popup.entries().len(), 1);

    let target = popup.entries()[0].path.to_string_lossy().into_owned();
    bar.select_folder(&target);
    assert_eq!(bar.path(), target);
    assert!(bar.items().last().unwrap().is_current());
}
