use shapefile_reader::{Geometry, Shapefile, ShapefileIndex};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-shp-file>", args[0]);
        std::process::exit(1);
    }

    let shp_path = Path::new(&args[1]);
    // The decoders treat extension validation as a caller precondition, so
    // enforce it here at the outermost edge.
    if shp_path.extension().and_then(|e| e.to_str()) != Some("shp") {
        eprintln!("ERROR: expected a .shp file, got {}", shp_path.display());
        std::process::exit(1);
    }

    println!("Reading shapefile: {}", shp_path.display());
    println!("{}", "=".repeat(60));

    let shapefile = match Shapefile::open(shp_path) {
        Ok(shapefile) => shapefile,
        Err(e) => {
            eprintln!("\nERROR: Failed to read shapefile");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    println!("\nHeader:");
    println!("  Shape type: {}", shapefile.header.shape_type);
    println!("  Version: {}", shapefile.header.version);
    println!(
        "  Declared length: {} words ({} payload bytes)",
        shapefile.header.file_length,
        shapefile.header.payload_len()
    );
    let bbox = shapefile.header.bbox;
    println!(
        "  Bounding box: ({}, {}) .. ({}, {})",
        bbox.xmin, bbox.ymin, bbox.xmax, bbox.ymax
    );

    println!("\nRecords: {}", shapefile.len());
    for (i, geometry) in shapefile.records.iter().take(10).enumerate() {
        match geometry {
            Geometry::Null => println!("  {}. Null", i + 1),
            Geometry::Point(p) => println!("  {}. Point ({}, {})", i + 1, p.x, p.y),
            Geometry::MultiPoint(mp) => {
                println!("  {}. MultiPoint with {} points", i + 1, mp.points.len())
            }
            Geometry::Poly(poly) => println!(
                "  {}. {} with {} parts, {} points",
                i + 1,
                shapefile.header.shape_type,
                poly.num_parts(),
                poly.points().len()
            ),
        }
    }
    if shapefile.len() > 10 {
        println!("  ... and {} more", shapefile.len() - 10);
    }

    // A sibling .shx lets us check the cross-file record count invariant.
    let shx_path = shp_path.with_extension("shx");
    if shx_path.exists() {
        match ShapefileIndex::open(&shx_path) {
            Ok(index) => {
                println!("\nIndex: {} entries ({})", index.len(), shx_path.display());
                if shapefile.matches_index(&index) {
                    println!("  Index entry count matches record count.");
                } else {
                    eprintln!(
                        "  WARNING: index has {} entries but the main file has {} records",
                        index.len(),
                        shapefile.len()
                    );
                }
            }
            Err(e) => eprintln!("\nWARNING: Failed to read index {}: {}", shx_path.display(), e),
        }
    }
}
