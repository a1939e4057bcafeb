//! Demo driver for querypick: walk an address through extraction,
//! selection, and reconstruction from the command line.
//!
//! Usage: querypick <address> [--toggle <index>]... [--all] [--sort]
//!                  [--fragment] [--copy]

use std::env;

use querypick::{
    extract_fragment_entries, sort_by_lowercase_key, App, SystemClipboard,
};

fn main() {
    let mut address = String::new();
    let mut toggles: Vec<usize> = Vec::new();
    let mut toggle_all = false;
    let mut sort = false;
    let mut show_fragment = false;
    let mut copy = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--toggle" => match args.next().and_then(|raw| raw.parse().ok()) {
                Some(index) => toggles.push(index),
                None => {
                    eprintln!("--toggle expects a numeric index");
                    return;
                }
            },
            "--all" => toggle_all = true,
            "--sort" => sort = true,
            "--fragment" => show_fragment = true,
            "--copy" => copy = true,
            other => address = other.to_string(),
        }
    }

    let mut app = App::new();
    app.set_address(&address);

    if !app.message().is_empty() {
        println!("{}", app.message());
    }

    for index in toggles {
        if let Err(err) = app.toggle_entry(index) {
            eprintln!("{}", err);
            return;
        }
    }
    if toggle_all {
        app.toggle_all();
    }

    if !app.entries().is_empty() {
        println!("Query parameters:");
        let mut listing: Vec<_> = app.entries().to_vec();
        if sort {
            listing.sort_by(|a, b| sort_by_lowercase_key(&a.entry, &b.entry));
        }
        for (index, toggled) in listing.iter().enumerate() {
            let mark = if toggled.enabled { "x" } else { " " };
            println!(
                "  [{}] {}. {}={}",
                mark, index, toggled.entry.key, toggled.entry.value
            );
        }
        println!("  ({})", app.toggle_all_label());
    }

    if show_fragment {
        match extract_fragment_entries(&address) {
            Ok(entries) => {
                println!("Fragment entries:");
                for entry in entries {
                    println!("  {}={}", entry.key, entry.value);
                }
            }
            Err(err) => eprintln!("{}", err),
        }
    }

    if let Some(result) = app.result_address() {
        println!("Result: {}", result);

        if copy {
            let mut clipboard = SystemClipboard::new();
            if app.copy_result(&mut clipboard) {
                println!("Copied");
            } else {
                println!("Not copied");
            }
        }
    }
}
