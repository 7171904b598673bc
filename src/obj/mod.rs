//! [Wavefront OBJ] (.obj) decoder.
//!
//! [Wavefront OBJ]: https://en.wikipedia.org/wiki/Wavefront_.obj_file

mod attrib;
mod group;
mod index;

use std::collections::{HashMap, HashSet};

pub use self::index::parse_index;
use self::{attrib::AttribBuilder, group::PrimGroup, index::parse_indices};
use crate::{
    error::Result,
    mtl::MtlData,
    utils::{bytes::Lines, int, rest_of_line, tokenize, utf16::decode_text},
    Attrib, Diagnostics, Material, Shape,
};

/// Options of an OBJ decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct DecodeOptions {
    /// Fan-triangulate faces with more than three vertices.
    ///
    /// Default: `true`
    pub triangulate: bool,
    /// Keep vertex colors even if some `v` lines had none.
    ///
    /// Default: `true`
    pub retain_partial_vertex_colors: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            triangulate: true,
            retain_partial_vertex_colors: true,
        }
    }
}

impl DecodeOptions {
    /// Sets whether or not to fan-triangulate faces with more than three
    /// vertices.
    #[must_use]
    pub fn triangulate(mut self, enable: bool) -> Self {
        self.triangulate = enable;
        self
    }

    /// Sets whether or not to keep vertex colors when only some `v` lines
    /// have them.
    #[must_use]
    pub fn retain_partial_vertex_colors(mut self, enable: bool) -> Self {
        self.retain_partial_vertex_colors = enable;
        self
    }
}

/// Result of an OBJ decode.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct ObjData {
    pub attrib: Attrib,
    /// Shapes in file order.
    pub shapes: Vec<Shape>,
    /// Materials of every loaded material library, in load order.
    pub materials: Vec<Material>,
    /// Material name to index into `materials`. The first definition of a
    /// name wins.
    pub material_map: HashMap<String, usize>,
    pub diagnostics: Diagnostics,
}

impl ObjData {
    /// Returns `true` if no error was recorded.
    ///
    /// Warnings do not make a decode fail; callers decide whether to promote
    /// them.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

/// Material reader that ignores `mtllib` directives.
pub fn ignore_materials(_name: &str) -> Result<MtlData> {
    Ok(MtlData::default())
}

/// Decodes bytes of Wavefront OBJ text.
///
/// See [`from_str`].
pub fn from_slice<F>(bytes: &[u8], options: &DecodeOptions, reader: F) -> Result<ObjData>
where
    F: FnMut(&str) -> Result<MtlData>,
{
    let text = decode_text(bytes)?;
    Ok(from_str(&text, options, reader))
}

/// Decodes Wavefront OBJ text.
///
/// `reader` is called once per distinct file name listed by `mtllib`
/// directives and must return the decoded library (typically through
/// [`mtl::from_str`](crate::mtl::from_str)). A reader error is recorded in
/// the returned diagnostics and decoding continues.
pub fn from_str<F>(text: &str, options: &DecodeOptions, reader: F) -> ObjData
where
    F: FnMut(&str) -> Result<MtlData>,
{
    let mut cx = Context::new(options, reader);
    for (line_no, line) in Lines::new(text) {
        cx.line(line_no, line);
    }
    cx.finish()
}

// -----------------------------------------------------------------------------
// Decode context

struct Context<'a, F> {
    options: &'a DecodeOptions,
    reader: F,
    attrib: AttribBuilder,
    group: PrimGroup,
    group_name: String,
    material_id: i32,
    smoothing_group_id: u32,
    shapes: Vec<Shape>,
    materials: Vec<Material>,
    material_map: HashMap<String, usize>,
    material_files: HashSet<String>,
    diagnostics: Diagnostics,
}

impl<'a, F> Context<'a, F>
where
    F: FnMut(&str) -> Result<MtlData>,
{
    fn new(options: &'a DecodeOptions, reader: F) -> Self {
        Self {
            options,
            reader,
            attrib: AttribBuilder::new(),
            group: PrimGroup::default(),
            group_name: String::new(),
            material_id: -1,
            smoothing_group_id: 0,
            shapes: vec![],
            materials: vec![],
            material_map: HashMap::new(),
            material_files: HashSet::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    fn line(&mut self, line_no: usize, line: &str) {
        let tokens = tokenize(line);
        let Some((&cmd, args)) = tokens.split_first() else {
            return;
        };
        match cmd {
            "v" => self.attrib.push_v(args),
            "vn" => self.attrib.push_vn(args),
            "vt" => self.attrib.push_vt(args),
            "vw" => self.attrib.push_vw(args),
            "f" if !args.is_empty() => {
                self.group
                    .push_face(line_no, self.smoothing_group_id, parse_indices(args));
            }
            "l" if !args.is_empty() => self.group.push_line(parse_indices(args)),
            "p" if !args.is_empty() => self.group.push_points(parse_indices(args)),
            "usemtl" => {
                self.flush();
                let name = args.first().copied().unwrap_or_default();
                match self.material_map.get(name) {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                    Some(&id) => self.material_id = id as i32,
                    None => {
                        self.material_id = -1;
                        self.diagnostics
                            .warn(line_no, format_args!("material [{name}] not found"));
                    }
                }
            }
            "mtllib" => {
                for &name in args {
                    self.load_material_library(line_no, name);
                }
            }
            "g" => {
                self.flush();
                self.group_name = args.join(" ");
            }
            "o" => {
                self.flush();
                self.group_name = rest_of_line(line, cmd).to_owned();
            }
            "s" => {
                if let Some(&id) = args.first() {
                    self.smoothing_group_id = if id == "off" {
                        0
                    } else {
                        int::parse::<u32>(id).unwrap_or(0)
                    };
                }
            }
            // comment, vp, mg, or other unknown
            _ => {}
        }
    }

    fn load_material_library(&mut self, line_no: usize, name: &str) {
        if !self.material_files.insert(name.to_owned()) {
            return;
        }
        match (self.reader)(name) {
            Ok(mtl) => {
                for material in mtl.materials {
                    let id = self.materials.len();
                    self.material_map
                        .entry(material.name.clone())
                        .or_insert(id);
                    self.materials.push(material);
                }
                self.diagnostics.append(mtl.diagnostics, Some(name));
            }
            Err(e) => {
                tracing::warn!(mtllib = name, "failed to load material library: {e}");
                self.diagnostics.error(
                    line_no,
                    format_args!("failed to load material library [{name}]: {e}"),
                );
            }
        }
    }

    /// Seals the buffered primitives into a shape, if any.
    fn flush(&mut self) {
        if let Some(shape) = self.group.export(
            &self.group_name,
            self.material_id,
            self.options.triangulate,
            &mut self.diagnostics,
        ) {
            self.shapes.push(shape);
        }
    }

    fn finish(mut self) -> ObjData {
        self.flush();
        let positions = self.attrib.positions();
        let attrib = self
            .attrib
            .finish(self.options.retain_partial_vertex_colors);
        tracing::debug!(
            positions,
            shapes = self.shapes.len(),
            materials = self.materials.len(),
            warnings = self.diagnostics.warnings().lines().count(),
            errors = self.diagnostics.errors().lines().count(),
            "decoded OBJ"
        );
        ObjData {
            attrib,
            shapes: self.shapes,
            materials: self.materials,
            material_map: self.material_map,
            diagnostics: self.diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mtl, Index};

    fn decode(text: &str) -> ObjData {
        from_str(text, &DecodeOptions::default(), ignore_materials)
    }

    #[test]
    fn vertex_data_only() {
        let data = decode("v 1 2 3\nvn 0 0 5\nvt 0.5 0.5\nv 4 5 6\n");
        assert!(data.shapes.is_empty());
        assert_eq!(data.attrib.positions, [[1., 2., 3.], [4., 5., 6.]]);
        assert_eq!(data.attrib.vertex_weights, [1., 1.]);
        assert_eq!(data.attrib.normals, [[0., 0., 5.]]);
        assert_eq!(data.attrib.texcoords, [[0.5, 0.5]]);
        assert!(data.is_ok());
    }

    #[test]
    fn single_unnamed_shape() {
        let data = decode("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\nl 1 2\np 3\n");
        assert_eq!(data.shapes.len(), 1);
        let shape = &data.shapes[0];
        assert_eq!(shape.name, "");
        assert_eq!(
            shape.mesh.indices,
            [Index::new(0, -1, -1), Index::new(1, -1, -1), Index::new(2, -1, -1)]
        );
        assert_eq!(shape.mesh.material_ids, [-1]);
        assert_eq!(shape.lines.num_line_vertices, [2]);
        assert_eq!(shape.points.indices, [Index::new(2, -1, -1)]);
    }

    #[test]
    fn group_and_object_names() {
        let data = decode(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             f 1 2 3\n\
             g front  cube\nf 1 2 3\n\
             o   my object  \nf 1 2 3\n\
             g\nf 1 2 3\n",
        );
        let names: Vec<_> = data.shapes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["", "front cube", "my object", ""]);
    }

    #[test]
    fn boundary_without_primitives_is_noop() {
        let data = decode("g a\ng b\no c\nusemtl x\nv 0 0 0\n");
        assert!(data.shapes.is_empty());
    }

    #[test]
    fn smoothing_groups() {
        let data = decode(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\n\
             s 2\nf 1 2 3 4\ns off\nf 1 2 3\ns x\nf 1 2 3\n",
        );
        assert_eq!(data.shapes[0].mesh.smoothing_group_ids, [2, 2, 0, 0]);
    }

    #[test]
    fn no_triangulation() {
        let data = from_str(
            "f 1 2 3 4 5\nf 1 2 3\n",
            &DecodeOptions::default().triangulate(false),
            ignore_materials,
        );
        assert_eq!(data.shapes[0].mesh.num_face_vertices, [5, 3]);
    }

    #[test]
    fn usemtl() {
        let mut calls = vec![];
        let data = from_str(
            "mtllib a.mtl b.mtl a.mtl\nmtllib b.mtl\n\
             f 1 2 3\nusemtl red\nf 1 2 3\nusemtl missing\nf 1 2 3\nusemtl blue\nf 1 2 3\n",
            &DecodeOptions::default(),
            |name: &str| {
                calls.push(name.to_owned());
                Ok(match name {
                    "a.mtl" => mtl::from_str("newmtl red\nKd 1 0 0\n"),
                    _ => mtl::from_str("newmtl blue\nKd 0 0 1\nnewmtl red\n"),
                })
            },
        );
        assert_eq!(calls, ["a.mtl", "b.mtl"]);
        let names: Vec<_> = data.materials.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["red", "blue", "red"]);
        assert_eq!(data.material_map["red"], 0);
        assert_eq!(data.material_map["blue"], 1);
        let ids: Vec<_> = data.shapes.iter().map(|s| s.mesh.material_ids[0]).collect();
        assert_eq!(ids, [-1, 0, -1, 1]);
        assert_eq!(data.diagnostics.warnings(), "line 6: material [missing] not found\n");
        assert!(data.is_ok());
    }

    #[test]
    fn unreadable_library() {
        let data = from_str("mtllib gone.mtl\nf 1 2 3\n", &DecodeOptions::default(), |_: &str| {
            Err(crate::Error::Io {
                path: "gone.mtl".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            })
        });
        assert!(!data.is_ok());
        assert_eq!(
            data.diagnostics.errors(),
            "line 1: failed to load material library [gone.mtl]: failed to read gone.mtl: not found\n"
        );
        assert_eq!(data.shapes.len(), 1);
    }

    #[test]
    fn library_warnings_are_prefixed() {
        let data = from_str("mtllib m.mtl\n", &DecodeOptions::default(), |_: &str| {
            Ok(mtl::from_str("newmtl a\nd 0.5\nTr 0.5\n"))
        });
        assert!(data.diagnostics.warnings().starts_with("m.mtl: line 3: "));
    }

    #[test]
    fn from_bytes() {
        let data = from_slice(
            b"\xEF\xBB\xBFv 1 2 3\r\nv 4 5 6\r\n",
            &DecodeOptions::default(),
            ignore_materials,
        )
        .unwrap();
        assert_eq!(data.attrib.positions.len(), 2);
    }
}
