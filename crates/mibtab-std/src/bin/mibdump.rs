//! Debug front end: parse one MIB file and dump its declaration names.
//!
//! Usage: mibdump <path-to-mib>

use std::env;
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: {} <path-to-mib>", args[0]);
        process::exit(1);
    }

    let module = match mibtab_std::parse_file(Path::new(&args[1])) {
        Ok(module) => module,
        Err(err) => {
            eprintln!("{}: {err}", args[1]);
            process::exit(1);
        }
    };

    println!("module {}", module.name);
    if let Some(mi) = &module.module_identity {
        println!("identity {} = {}", mi.name, mi.oid);
    }
    println!("object types:");
    for name in module.objects.keys() {
        println!("  {name}");
    }
    println!("object identities:");
    for name in module.object_identities.keys() {
        println!("  {name}");
    }
    println!("textual conventions:");
    for name in module.textual_conventions.keys() {
        println!("  {name}");
    }
    println!("notifications:");
    for name in module.notification_types.keys() {
        println!("  {name}");
    }
    println!("nodes:");
    for (name, oid) in &module.nodes {
        if oid.is_empty() {
            println!("  {name} (unresolved)");
        } else {
            println!("  {name} = {oid}");
        }
    }
}
