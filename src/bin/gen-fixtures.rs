use std::process::exit;

use relates_gen::fixtures::{rand_polys, wkt_collection, BUFFER_DEGREES, MAX_SEGMENT_DEGREES};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: gen-fixtures COUNT OUT.wkt");
        exit(2);
    }
    let n: usize = match args[1].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("gen-fixtures: COUNT must be a non-negative integer, got {:?}", args[1]);
            exit(2);
        }
    };
    let path = &args[2];
    if !path.ends_with(".wkt") {
        eprintln!("gen-fixtures: only .wkt output is supported, got {:?}", path);
        exit(2);
    }

    let mut rng = rand::thread_rng();
    let polys = rand_polys(&mut rng, n, MAX_SEGMENT_DEGREES, BUFFER_DEGREES);
    if let Err(err) = std::fs::write(path, wkt_collection(&polys)) {
        eprintln!("gen-fixtures: {}: {}", path, err);
        exit(1);
    }
}
