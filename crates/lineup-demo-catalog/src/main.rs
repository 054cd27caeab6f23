#![forbid(unsafe_code)]

//! Line-driven console for the catalog demo.
//!
//! ```text
//! lineup> ls tours
//! lineup> move tours 0 2
//! lineup> fail tours network down
//! lineup> move tours 0 2        # optimistic, then rolled back
//! ```

use std::io::{self, BufRead, Write};

use lineup_core::Orderable;
use lineup_engine::{Notice, Severity};
use lineup_gesture::KeyCommand;
use tracing_subscriber::EnvFilter;

use lineup_demo_catalog::{CatalogApp, CatalogRecord, CollectionView};

const HELP: &str = "\
commands (coll is one of: tours, cats, subs)
  ls <coll>                show rows, filtered view marked
  move <coll> <from> <to>  drag a row to a new index
  up <coll> <index>        keyboard-move a row up
  down <coll> <index>      keyboard-move a row down
  search <coll> [term]     set or clear the search term
  only <coll> [key]        set or clear the subset filter
  add <coll> <name...>     create a row (refetches)
  rm <coll> <index>        delete a row (refetches)
  fail <coll> [message]    make the next persist call fail
  stats <coll>             engine counters
  help                     this text
  quit";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut app = CatalogApp::seeded();
    println!("lineup demo catalog — type 'help' for commands");

    let stdin = io::stdin();
    loop {
        print!("lineup> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = parts.split_first() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            _ => {
                let Some((&coll, args)) = rest.split_first() else {
                    println!("usage: {command} <coll> ...  (try 'help')");
                    continue;
                };
                match coll {
                    "tours" => run(&mut app.tours, command, args),
                    "cats" => run(&mut app.gallery_categories, command, args),
                    "subs" => run(&mut app.gallery_subcategories, command, args),
                    other => println!("unknown collection '{other}' (tours, cats, subs)"),
                }
            }
        }
    }
}

fn run<T: CatalogRecord>(view: &mut CollectionView<T>, command: &str, args: &[&str]) {
    match command {
        "ls" => list(view),
        "move" => match (parse_index(args.first()), parse_index(args.get(1))) {
            (Some(from), Some(to)) => report(view.move_row(from, to)),
            _ => println!("usage: move <coll> <from> <to>"),
        },
        "up" => match parse_index(args.first()) {
            Some(index) => report(view.nudge(KeyCommand::MoveUp, index)),
            None => println!("usage: up <coll> <index>"),
        },
        "down" => match parse_index(args.first()) {
            Some(index) => report(view.nudge(KeyCommand::MoveDown, index)),
            None => println!("usage: down <coll> <index>"),
        },
        "search" => {
            view.set_search(args.join(" "));
            gate_status(view);
        }
        "only" => {
            view.set_subset(args.first().map(|key| (*key).to_string()));
            gate_status(view);
        }
        "add" => {
            if args.is_empty() {
                println!("usage: add <coll> <name...>");
            } else {
                report(view.create(args.join(" ")));
                list(view);
            }
        }
        "rm" => match parse_index(args.first()) {
            Some(index) => {
                report(view.delete_at(index));
                list(view);
            }
            None => println!("usage: rm <coll> <index>"),
        },
        "fail" => {
            let message = if args.is_empty() {
                "injected failure".to_string()
            } else {
                args.join(" ")
            };
            view.fail_next(message);
            println!("next {} persist will fail", view.label());
        }
        "stats" => println!("{:#?}", view.stats()),
        other => println!("unknown command '{other}' (try 'help')"),
    }
}

fn list<T: CatalogRecord>(view: &CollectionView<T>) {
    let visible = view.visible();
    let total = view.rows().len();
    if visible.len() < total {
        println!(
            "{} — showing {} of {} rows (reordering disabled by filter)",
            view.label(),
            visible.len(),
            total
        );
    } else {
        println!("{} — {} rows", view.label(), total);
    }
    for (index, row) in visible {
        let order = match row.order() {
            Some(order) => order.to_string(),
            None => "-".to_string(),
        };
        println!(
            "  [{index:>2}] {:<28} order={order:<3} id={}",
            row.display_name(),
            row.id()
        );
    }
}

fn gate_status<T: CatalogRecord>(view: &CollectionView<T>) {
    if view.reorder_allowed() {
        println!("reordering enabled");
    } else {
        println!("reordering disabled while the view is filtered");
    }
    list(view);
}

fn report(notices: Vec<Notice>) {
    for notice in notices {
        let tag = match notice.severity {
            Severity::Info => "info",
            Severity::Success => "ok",
            Severity::Error => "error",
        };
        println!("[{tag}] {}", notice.text);
    }
}

fn parse_index(arg: Option<&&str>) -> Option<usize> {
    arg.and_then(|value| value.parse().ok())
}
