use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use nf_graph::{Network, load_links_path};
use nf_route::{reachability, shortest_path};

#[derive(Parser)]
#[command(name = "nf-cli")]
#[command(about = "Netflow CLI - link-state network query shell", long_about = None)]
struct Cli {
    /// Topology file to preload: `<source> <destination> <weight>` triples
    #[arg(short, long)]
    topology: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut net = Network::new();

    if let Some(path) = &cli.topology {
        cmd_load(&mut net, path);
    }

    println!("*******************************");
    println!("* Shortest Paths in a Network *");
    println!("*******************************");

    run_shell(&mut net)
}

fn run_shell(net: &mut Network) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("\n=> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            return Ok(());
        }
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let Some((&action, args)) = tokens.split_first() else {
            continue;
        };

        match (action, args) {
            ("graph", [file]) => cmd_load(net, Path::new(file)),
            ("addedge", [src, dst, weight]) => cmd_add_edge(net, src, dst, weight),
            ("deleteedge", [src, dst]) => cmd_delete_edge(net, src, dst),
            ("edgedown", [src, dst]) => cmd_set_edge(net, src, dst, false),
            ("edgeup", [src, dst]) => cmd_set_edge(net, src, dst, true),
            ("vertexdown", [router]) => cmd_set_vertex(net, router, false),
            ("vertexup", [router]) => cmd_set_vertex(net, router, true),
            ("path", [src, dst]) => cmd_path(net, src, dst),
            ("print", []) => print!("{}", net.topology()),
            ("print", ["json"]) => cmd_print_json(net),
            ("reachable", []) => cmd_reachable(net),
            ("quit", _) => return Ok(()),
            _ => usage(),
        }
    }
}

fn cmd_load(net: &mut Network, path: &Path) {
    match load_links_path(net, path) {
        Ok(report) => println!(
            "Loaded {} link pairs ({} lines skipped)",
            report.pairs, report.skipped
        ),
        Err(err) => eprintln!("{err}"),
    }
}

fn cmd_add_edge(net: &mut Network, src: &str, dst: &str, weight: &str) {
    let Ok(weight) = weight.parse::<f64>() else {
        eprintln!("Transmission time <{weight}> is not a number");
        return;
    };
    match net.add_link(src, dst, weight) {
        Ok(()) => println!("Added link {src} -> {dst} ({weight})"),
        Err(err) => eprintln!("{err}"),
    }
}

fn cmd_delete_edge(net: &mut Network, src: &str, dst: &str) {
    if net.delete_link(src, dst) {
        println!("Removed link {src} -> {dst}");
    } else {
        eprintln!("No link {src} -> {dst}");
    }
}

fn cmd_set_edge(net: &mut Network, src: &str, dst: &str, up: bool) {
    if net.set_link_active(src, dst, up) {
        println!(
            "Link {src} -> {dst} is {}",
            if up { "up" } else { "down" }
        );
    } else {
        eprintln!("No link {src} -> {dst}");
    }
}

fn cmd_set_vertex(net: &mut Network, router: &str, up: bool) {
    if net.set_router_active(router, up) {
        println!("Router {router} is {}", if up { "up" } else { "down" });
    } else {
        eprintln!("No router {router}");
    }
}

fn cmd_path(net: &mut Network, src: &str, dst: &str) {
    match shortest_path(net, src, dst) {
        Ok(route) => println!("{}  {}", route.hops.join(" -> "), route.cost),
        Err(err) => eprintln!("{err}"),
    }
}

fn cmd_print_json(net: &Network) {
    match serde_json::to_string_pretty(&net.topology()) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("{err}"),
    }
}

fn cmd_reachable(net: &mut Network) {
    let map = reachability(net);
    for (name, ancestors) in &map {
        let Some(id) = net.lookup(name) else { continue };
        if !net.router(id).is_active() {
            continue;
        }
        println!("{name}");
        for ancestor in ancestors {
            println!("  {ancestor}");
        }
    }
}

fn usage() {
    eprintln!("Usage: <action> <parameters>");
    eprintln!("  graph <file path>");
    eprintln!("  addedge <source> <destination> <transmission time>");
    eprintln!("  deleteedge <source> <destination>");
    eprintln!("  edgedown <source> <destination>");
    eprintln!("  edgeup <source> <destination>");
    eprintln!("  vertexdown <router>");
    eprintln!("  vertexup <router>");
    eprintln!("  path <source> <destination>");
    eprintln!("  print [json]");
    eprintln!("  reachable");
    eprintln!("  quit");
}
