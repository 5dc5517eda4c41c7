//! Renders a breadcrumb bar for a path to the terminal, then walks one
//! level up and lists the current folder the way the popup would.
//!
//! Usage: `terminal [PATH]` (defaults to the current directory).

use std::env;

use crumbbar::prelude::*;
use crumbbar::theme::config::ThemeConfig;

fn main() {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| {
        env::current_dir()
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "/".to_string())
    });

    let theme = ThemeConfig::from_env_or_default()
        .resolve_theme()
        .expect("built-in themes always resolve");
    log::info!("Using theme: {}", theme.name());

    let config = BarConfig::from_env_or_default().with_separator(" > ");
    let mut bar = BreadcrumbBar::with_config(config)
        .with_on_path_changed(std::sync::Arc::new(|path: &str| {
            println!("path changed -> {path}");
        }));
    bar.set_path(&path);

    let mut renderer = TextRenderer::new();
    bar.render(&mut renderer, theme.as_ref());
    println!("{}", renderer.line());

    // Activate the current crumb: this requests the folder popup.
    let current = bar.items().len().saturating_sub(1);
    if let Some(Activation::PopupRequested(popup_path)) = bar.click(current) {
        let popup = bar.open_popup(&popup_path);
        println!("folders in {popup_path}:");
        if popup.is_empty() {
            println!("  (no folders found)");
        }
        for entry in popup.entries() {
            println!("  {}", entry.name);
        }
    }

    // Activate the first crumb: this navigates to the root of the path.
    if bar.items().len() > 1 {
        bar.click(0);
        renderer.clear();
        bar.render(&mut renderer, theme.as_ref());
        println!("{}", renderer.line());
    }
}
