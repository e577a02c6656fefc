//! tola-nav - inspect the navigation menus of a tola site.

use std::fmt::Write;

use anyhow::{Result, bail};
use clap::Parser;
use rayon::prelude::*;
use tola_nav::{
    Menu, MenuCache,
    cli::{Cli, Commands},
    config::{NavConfig, NavigationConfig},
    log, logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::set_verbose(cli.verbose);

    let config = NavConfig::load(&cli)?;
    let menus = config.build_menus()?;
    log!("menu"; "assembled {} menus from {}", menus.len(), config.config_path.display());

    match &cli.command {
        Commands::List => {
            for (name, menu) in &menus {
                println!("{name} ({} entries)", menu.len());
            }
        }
        Commands::Show { menu: Some(name), .. } => {
            let Some(menu) = menus.get(name) else {
                bail!("no menu named `{name}`");
            };
            // One cache for the whole run, like one build
            let cache = MenuCache::new();
            println!("{}", render_menu(name, menu, &config.navigation, &cache));
        }
        Commands::Show { menu: None, .. } => {
            let cache = MenuCache::new();
            let rendered: Vec<String> = menus
                .par_iter()
                .map(|(name, menu)| render_menu(name, menu, &config.navigation, &cache))
                .collect();
            println!("{}", rendered.join("\n"));
            if logger::is_verbose() {
                log!("cache"; "{} orderings cached", cache.len());
            }
        }
    }

    Ok(())
}

/// Render a menu tree as indented text, ordering every level.
fn render_menu(name: &str, menu: &Menu, nav: &NavigationConfig, cache: &MenuCache) -> String {
    let mut out = format!("{name}\n");
    render_level(menu, nav, cache, 1, &mut out);
    out
}

fn render_level(menu: &Menu, nav: &NavigationConfig, cache: &MenuCache, depth: usize, out: &mut String) {
    for entry in nav.order(menu, cache).iter() {
        let indent = "  ".repeat(depth);
        let weight = match entry.weight {
            0 => String::new(),
            w => format!(" [{w}]"),
        };
        writeln!(out, "{indent}- {entry}{weight}").ok();

        if let Some(children) = &entry.children {
            render_level(children, nav, cache, depth + 1, out);
        }
    }
}
