use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use planar::api::*;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod input;
mod provenance;

use input::{parse_coords, read_points, read_polygon};
use provenance::{current_git_rev, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Run one planar geometry query on a file and print JSON")]
struct Cmd {
    /// Write the JSON result here (plus a provenance sidecar) instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    /// Fan of triangles; convex polygons only
    Fan,
    /// Ray casting with automatic far point
    Ray,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of a point set
    Hull {
        #[arg(long)]
        input: PathBuf,
    },
    /// Area, orientation, convexity, simplicity and vertex labels
    Classify {
        #[arg(long)]
        input: PathBuf,
    },
    /// Point-in-polygon query
    Contains {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, value_enum, default_value_t = Method::Ray)]
        method: Method,
    },
    /// Internal and external diagonals of a simple polygon
    Diagonals {
        #[arg(long)]
        input: PathBuf,
    },
    /// Tangent points from an external point to a convex polygon
    Tangents {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Do two segments touch? Eight numbers: x0,y0,x1,y1,x2,y2,x3,y3
    Intersect {
        #[arg(long, allow_hyphen_values = true)]
        segments: String,
    },
    /// Draw a reproducible random polygon
    Sample {
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Wrap the draw in its convex hull
        #[arg(long)]
        convex: bool,
    },
    /// Print version and tolerance settings
    Report,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    let (payload, result) = run(cmd.action)?;
    emit(cmd.out.as_deref(), payload, &result)
}

fn run(action: Action) -> Result<(Payload, Value)> {
    match action {
        Action::Hull { input } => {
            let points = read_points(&input)?;
            let hull = convex_hull(&points);
            tracing::info!(points = points.len(), hull = hull.len(), "hull");
            Ok((
                Payload::new("hull", json!({ "input": input })),
                json!({ "hull": xys(&hull) }),
            ))
        }
        Action::Classify { input } => {
            let poly = read_polygon(&input)?;
            let classes = classify_vertices(&poly);
            Ok((
                Payload::new("classify", json!({ "input": input })),
                json!({
                    "vertices": poly.len(),
                    "area": polygon_area(&poly),
                    "orientation": format!("{:?}", orientation(&poly)),
                    "convex": is_convex(&poly),
                    "simple": is_simple(&poly),
                    "convex_vertices": xys(&classes.convex),
                    "concave_vertices": xys(&classes.concave),
                }),
            ))
        }
        Action::Contains {
            input,
            x,
            y,
            method,
        } => {
            let poly = read_polygon(&input)?;
            let q = pt(x, y);
            let inside = match method {
                Method::Fan => contains_fan(&poly, q),
                Method::Ray => contains(&poly, q),
            }
            .with_context(|| format!("contains ({x}, {y}) via {method:?}"))?;
            Ok((
                Payload::new(
                    "contains",
                    json!({ "input": input, "x": x, "y": y, "method": format!("{method:?}") }),
                ),
                json!({ "inside": inside }),
            ))
        }
        Action::Diagonals { input } => {
            let poly = read_polygon(&input)?;
            let split = polygon_diagonals(&poly).context("classifying diagonals")?;
            Ok((
                Payload::new("diagonals", json!({ "input": input })),
                json!({
                    "internal": diagonals_json(&split.internal),
                    "external": diagonals_json(&split.external),
                }),
            ))
        }
        Action::Tangents { input, x, y } => {
            let poly = read_polygon(&input)?;
            let points = tangent_points(&poly, pt(x, y))
                .with_context(|| format!("tangents from ({x}, {y})"))?;
            Ok((
                Payload::new("tangents", json!({ "input": input, "x": x, "y": y })),
                json!({ "tangents": xys(&points) }),
            ))
        }
        Action::Intersect { segments } => {
            let [x0, y0, x1, y1, x2, y2, x3, y3] = parse_coords::<8>(&segments)?;
            let s = Segment::new(pt(x0, y0), pt(x1, y1));
            let t = Segment::new(pt(x2, y2), pt(x3, y3));
            Ok((
                Payload::new("intersect", json!({ "segments": segments })),
                json!({ "intersects": intersects(&s, &t) }),
            ))
        }
        Action::Sample {
            vertices,
            seed,
            index,
            convex,
        } => {
            let cfg = RadialCfg {
                vertex_count: VertexCount::Fixed(vertices),
                ..RadialCfg::default()
            };
            let tok = ReplayToken { seed, index };
            let poly = if convex {
                draw_convex_polygon(cfg, tok)?
            } else {
                draw_star_polygon(cfg, tok)?
            };
            Ok((
                Payload::new(
                    "sample",
                    json!({ "vertices": vertices, "seed": seed, "index": index, "convex": convex }),
                ),
                json!({ "polygon": xys(poly.vertices()) }),
            ))
        }
        Action::Report => Ok((
            Payload::new("report", json!({})),
            json!({
                "code_rev": current_git_rev(),
                "planar_version": planar::VERSION,
                "tolerances": {
                    "sign_eps": planar::cfg::SIGN_EPS,
                    "length_rel_eps": planar::cfg::LENGTH_REL_EPS,
                    "coincide_eps": planar::cfg::COINCIDE_EPS,
                    "max_ray_attempts": planar::cfg::MAX_RAY_ATTEMPTS,
                },
            }),
        )),
    }
}

fn emit(out: Option<&Path>, payload: Payload, result: &Value) -> Result<()> {
    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(result)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let sidecar = write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %sidecar.display(), "wrote result");
    Ok(())
}

fn xys(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

fn diagonals_json(ds: &[Diagonal]) -> Vec<Value> {
    ds.iter()
        .map(|d| json!({ "i": d.i, "j": d.j, "a": [d.a.x, d.a.y], "b": [d.b.x, d.b.y] }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const DART: &str = "[[0,0],[2,0],[2,2],[1,1],[0,2]]";

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn diagonals_of_a_dart() {
        let dir = tempdir().unwrap();
        let input = write(dir.path(), "dart.json", DART);
        let (payload, v) = run(Action::Diagonals { input }).unwrap();
        assert_eq!(payload.command, "diagonals");
        assert_eq!(v["internal"].as_array().unwrap().len(), 2);
        assert_eq!(v["external"][0]["i"], 2);
        assert_eq!(v["external"][0]["j"], 4);
    }

    #[test]
    fn contains_methods() {
        let dir = tempdir().unwrap();
        let input = write(dir.path(), "dart.json", DART);
        let (_, v) = run(Action::Contains {
            input: input.clone(),
            x: 1.0,
            y: 1.5,
            method: Method::Ray,
        })
        .unwrap();
        assert_eq!(v["inside"], false);
        let err = run(Action::Contains {
            input,
            x: 1.0,
            y: 0.5,
            method: Method::Fan,
        })
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeomError>(),
            Some(&GeomError::NotConvex)
        );
    }

    #[test]
    fn hull_from_csv() {
        let dir = tempdir().unwrap();
        let input = write(dir.path(), "pts.csv", "x,y\n0,0\n1,0\n0.5,0.5\n1,1\n0,1\n");
        let (_, v) = run(Action::Hull { input }).unwrap();
        assert_eq!(v["hull"], json!([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]));
    }

    #[test]
    fn tangents_and_intersect() {
        let dir = tempdir().unwrap();
        let input = write(dir.path(), "sq.json", "[[0,0],[1,0],[1,1],[0,1]]");
        let (_, v) = run(Action::Tangents {
            input,
            x: 3.0,
            y: 0.5,
        })
        .unwrap();
        assert_eq!(v["tangents"], json!([[1.0, 0.0], [1.0, 1.0]]));
        let (_, v) = run(Action::Intersect {
            segments: "0,0,2,2,0,2,2,0".into(),
        })
        .unwrap();
        assert_eq!(v["intersects"], true);
    }

    #[test]
    fn out_writes_result_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("runs").join("sample.json");
        let (payload, v) = run(Action::Sample {
            vertices: 8,
            seed: 5,
            index: 1,
            convex: false,
        })
        .unwrap();
        assert_eq!(v["polygon"].as_array().unwrap().len(), 8);
        emit(Some(out.as_path()), payload, &v).unwrap();
        let written: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(written, v);
        assert!(dir.path().join("runs").join("sample.provenance.json").exists());
    }

    #[test]
    fn cli_parses_global_out() {
        let cmd = Cmd::try_parse_from([
            "planar-cli",
            "contains",
            "--input",
            "p.json",
            "--x",
            "-1.5",
            "--y",
            "2",
            "--method",
            "fan",
            "--out",
            "r.json",
        ])
        .unwrap();
        assert_eq!(cmd.out, Some(PathBuf::from("r.json")));
        assert!(matches!(
            cmd.action,
            Action::Contains { x, method: Method::Fan, .. } if x == -1.5
        ));
    }
}
