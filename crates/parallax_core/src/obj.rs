//! Wavefront OBJ file parser.
//!
//! Line-by-line parsing of the subset the renderer needs: `v` vertex
//! positions and `f` faces. Faces with more than three corners are fan
//! triangulated. Texture/normal references after `/` in face corners are
//! ignored, as are all other statements (`vn`, `vt`, `g`, `usemtl`, ...).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use parallax_math::Vec3;
use thiserror::Error;

use crate::mesh::Mesh;

/// Errors that can occur while reading an OBJ file.
#[derive(Error, Debug)]
pub enum ObjError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: malformed {statement} statement")]
    Malformed { line: usize, statement: &'static str },

    #[error("line {line}: vertex reference {reference} out of range")]
    BadVertexReference { line: usize, reference: isize },
}

/// Load a mesh from an OBJ file on disk.
pub fn load_obj(path: impl AsRef<Path>) -> Result<Mesh, ObjError> {
    let file = File::open(path.as_ref())?;
    let mesh = parse_obj(BufReader::new(file))?;
    log::debug!(
        "loaded {}: {} vertices, {} triangles",
        path.as_ref().display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Parse OBJ text from any buffered reader.
pub fn parse_obj<R: BufRead>(reader: R) -> Result<Mesh, ObjError> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let mut component = || {
                    tokens
                        .next()
                        .and_then(|t| t.parse::<f32>().ok())
                        .ok_or(ObjError::Malformed {
                            line: line_no,
                            statement: "vertex",
                        })
                };
                let x = component()?;
                let y = component()?;
                let z = component()?;
                positions.push(Vec3::new(x, y, z));
            }
            Some("f") => {
                let corners = tokens
                    .map(|t| resolve_corner(t, positions.len(), line_no))
                    .collect::<Result<Vec<u32>, ObjError>>()?;
                if corners.len() < 3 {
                    return Err(ObjError::Malformed {
                        line: line_no,
                        statement: "face",
                    });
                }
                // Fan triangulation around the first corner
                for k in 1..corners.len() - 1 {
                    indices.push(corners[0]);
                    indices.push(corners[k]);
                    indices.push(corners[k + 1]);
                }
            }
            _ => {}
        }
    }

    Ok(Mesh::new(positions, indices))
}

/// Resolve one face corner token (`7`, `7/1`, `7//3`, `-1`) to a 0-based
/// vertex index.
fn resolve_corner(token: &str, vertex_count: usize, line: usize) -> Result<u32, ObjError> {
    let index_part = token.split('/').next().unwrap_or(token);
    let reference: isize = index_part.parse().map_err(|_| ObjError::Malformed {
        line,
        statement: "face",
    })?;

    // OBJ indices are 1-based; negative values count back from the end
    let resolved = if reference > 0 {
        reference - 1
    } else if reference < 0 {
        vertex_count as isize + reference
    } else {
        return Err(ObjError::BadVertexReference { line, reference });
    };

    if resolved < 0 || resolved as usize >= vertex_count {
        return Err(ObjError::BadVertexReference { line, reference });
    }
    Ok(resolved as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_triangle() {
        let src = "\
# comment
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
f 1 2 3
";
        let mesh = parse_obj(Cursor::new(src)).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangle_vertex(0, 2), 2);
    }

    #[test]
    fn test_parse_quad_fan() {
        let src = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";
        let mesh = parse_obj(Cursor::new(src)).unwrap();
        // A quad splits into triangles (0,1,2) and (0,2,3)
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangle_vertex(1, 0), 0);
        assert_eq!(mesh.triangle_vertex(1, 1), 2);
        assert_eq!(mesh.triangle_vertex(1, 2), 3);
    }

    #[test]
    fn test_parse_slash_and_negative_references() {
        let src = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
f 1/1/1 2/2/1 -1//1
";
        let mesh = parse_obj(Cursor::new(src)).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangle_vertex(0, 2), 2);
    }

    #[test]
    fn test_out_of_range_reference() {
        let src = "\
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 4
";
        let err = parse_obj(Cursor::new(src)).unwrap_err();
        assert!(matches!(
            err,
            ObjError::BadVertexReference { line: 4, reference: 4 }
        ));
    }

    #[test]
    fn test_malformed_vertex() {
        let err = parse_obj(Cursor::new("v 1.0 nope 2.0\n")).unwrap_err();
        assert!(matches!(err, ObjError::Malformed { line: 1, .. }));
    }
}
