use crate::{Diagnostics, Index, Lines, Mesh, Points, Shape};

/// A face as read, before triangulation.
#[derive(Debug)]
struct Face {
    /// Line the face was read from, for diagnostics.
    line: usize,
    smoothing_group_id: u32,
    indices: Vec<Index>,
}

/// Primitives read since the last shape boundary.
#[derive(Debug, Default)]
pub(super) struct PrimGroup {
    faces: Vec<Face>,
    lines: Vec<Vec<Index>>,
    points: Vec<Vec<Index>>,
}

impl PrimGroup {
    pub(super) fn push_face(&mut self, line: usize, smoothing_group_id: u32, indices: Vec<Index>) {
        self.faces.push(Face {
            line,
            smoothing_group_id,
            indices,
        });
    }

    pub(super) fn push_line(&mut self, indices: Vec<Index>) {
        self.lines.push(indices);
    }

    pub(super) fn push_points(&mut self, indices: Vec<Index>) {
        self.points.push(indices);
    }

    pub(super) fn is_empty(&self) -> bool {
        self.faces.is_empty() && self.lines.is_empty() && self.points.is_empty()
    }

    /// Seals the buffered primitives into a shape and clears the buffer.
    ///
    /// Returns `None` if nothing is buffered. Faces with less than three
    /// vertices are dropped with a warning.
    pub(super) fn export(
        &mut self,
        name: &str,
        material_id: i32,
        triangulate: bool,
        diagnostics: &mut Diagnostics,
    ) -> Option<Shape> {
        if self.is_empty() {
            return None;
        }

        let mut mesh = Mesh::default();
        for face in self.faces.drain(..) {
            let n = face.indices.len();
            if n < 3 {
                diagnostics.warn(
                    face.line,
                    format_args!("degenerate face found ({n} vertices), skipped"),
                );
                continue;
            }
            if triangulate && n > 3 {
                // fan around the first vertex: (v0, v1, v2), (v0, v2, v3), ...
                let v0 = face.indices[0];
                for pair in face.indices[1..].windows(2) {
                    mesh.indices.extend_from_slice(&[v0, pair[0], pair[1]]);
                    mesh.num_face_vertices.push(3);
                    mesh.material_ids.push(material_id);
                    mesh.smoothing_group_ids.push(face.smoothing_group_id);
                }
            } else {
                #[allow(clippy::cast_possible_truncation)]
                let n = n as u32;
                mesh.num_face_vertices.push(n);
                mesh.indices.extend(face.indices);
                mesh.material_ids.push(material_id);
                mesh.smoothing_group_ids.push(face.smoothing_group_id);
            }
        }

        let mut lines = Lines::default();
        for line in self.lines.drain(..) {
            #[allow(clippy::cast_possible_truncation)]
            let n = line.len() as u32;
            lines.num_line_vertices.push(n);
            lines.indices.extend(line);
        }

        let mut points = Points::default();
        for p in self.points.drain(..) {
            points.indices.extend(p);
        }

        Some(Shape {
            name: name.to_owned(),
            mesh,
            lines,
            points,
        })
    }
}
