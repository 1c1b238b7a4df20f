use postfig::theme::Palette;
use postfig::{diagrams, output, watch};
use regex::Regex;
use std::path::PathBuf;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return;
    }

    match args[0].as_str() {
        "render" => cmd_render(&args[1..]),
        "list" => {
            for diagram in diagrams::all() {
                println!("{}", diagram.name);
            }
        }
        "watch" => cmd_watch(&args[1..]),
        other => {
            eprintln!("Error: unknown command '{}'", other);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("postfig - Render static SVG diagrams for blog posts");
    println!();
    println!("Usage: postfig <COMMAND>");
    println!();
    println!("Commands:");
    println!("  render [NAME...]   Render all (or the named) diagrams");
    println!("      -o DIR         Output directory (default: out)");
    println!("      --theme NAME   Built-in palette: light, dark (default: light)");
    println!("      --theme-file F JSON palette file (overrides --theme)");
    println!("  list               Print the registered diagram names");
    println!("  watch DIR          Re-run the scripts in DIR on every change");
    println!("      -p PATTERN     Script filename pattern (default: \\.sh$)");
}

fn cmd_render(args: &[String]) {
    let mut out_dir = PathBuf::from("out");
    let mut theme_name = "light".to_string();
    let mut theme_file: Option<String> = None;
    let mut names: Vec<String> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--out" => match iter.next() {
                Some(dir) => out_dir = PathBuf::from(dir),
                None => exit_with("-o needs a directory"),
            },
            "--theme" => match iter.next() {
                Some(name) => theme_name = name.clone(),
                None => exit_with("--theme needs a name"),
            },
            "--theme-file" => match iter.next() {
                Some(path) => theme_file = Some(path.clone()),
                None => exit_with("--theme-file needs a path"),
            },
            name => names.push(name.to_string()),
        }
    }

    let palette = match load_palette(&theme_name, theme_file.as_deref()) {
        Ok(palette) => palette,
        Err(e) => exit_with(&e),
    };

    let all = diagrams::all();
    let selected: Vec<&diagrams::Diagram> = if names.is_empty() {
        all.iter().collect()
    } else {
        let mut picked = Vec::new();
        for name in &names {
            match all.iter().find(|d| d.name == name.as_str()) {
                Some(diagram) => picked.push(diagram),
                None => {
                    eprintln!("Error: no diagram named '{}'. Known diagrams:", name);
                    for diagram in &all {
                        eprintln!("  {}", diagram.name);
                    }
                    process::exit(1);
                }
            }
        }
        picked
    };

    for diagram in selected {
        let rendered = (diagram.draw)(&palette);
        let filename = format!("{}.svg", diagram.name);
        if let Err(e) = output::save(&out_dir, &filename, &rendered) {
            eprintln!("Error: failed to write {}: {}", filename, e);
            process::exit(1);
        }
        println!("{}", out_dir.join(&filename).display());
    }
}

fn cmd_watch(args: &[String]) {
    let mut dir: Option<PathBuf> = None;
    let mut pattern: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-p" | "--pattern" => match iter.next() {
                Some(p) => pattern = Some(p.clone()),
                None => exit_with("-p needs a pattern"),
            },
            path => dir = Some(PathBuf::from(path)),
        }
    }

    let dir = match dir {
        Some(dir) => dir,
        None => exit_with("watch needs a directory"),
    };
    let pattern = match pattern {
        Some(p) => match Regex::new(&p) {
            Ok(re) => re,
            Err(e) => exit_with(&format!("invalid pattern '{}': {}", p, e)),
        },
        None => watch::DEFAULT_SCRIPT_PATTERN.clone(),
    };

    if let Err(e) = watch::watch(&dir, &pattern) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn load_palette(name: &str, file: Option<&str>) -> Result<Palette, String> {
    if let Some(path) = file {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path, e))?;
        serde_json::from_str(&json).map_err(|e| format!("invalid palette in {}: {}", path, e))
    } else {
        Palette::from_name(name)
            .ok_or_else(|| format!("unknown theme '{}' (expected 'light' or 'dark')", name))
    }
}

fn exit_with(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}
