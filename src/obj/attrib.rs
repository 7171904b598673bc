use crate::{
    utils::{float, int},
    Attrib, JointWeight, SkinWeight,
};

/// Accumulates the vertex data lines (`v`, `vn`, `vt`, `vw`) of one decode.
#[derive(Debug)]
pub(super) struct AttribBuilder {
    attrib: Attrib,
    /// Cleared as soon as one `v` line comes without a color.
    found_all_colors: bool,
}

impl AttribBuilder {
    pub(super) fn new() -> Self {
        Self {
            attrib: Attrib::default(),
            found_all_colors: true,
        }
    }

    pub(super) fn positions(&self) -> usize {
        self.attrib.positions.len()
    }

    /// `v x y z [w | r g b]`
    ///
    /// `args` excludes the command token.
    pub(super) fn push_v(&mut self, args: &[&str]) {
        if args.len() < 3 {
            return;
        }
        let mut xyz = [0.; 3];
        float::parse_vec3(&args[..3], &mut xyz);
        self.attrib.positions.push(xyz);
        match args.len() {
            4 => {
                // homogeneous weight
                let mut w = 1.;
                float::parse_into(args.get(3), &mut w);
                self.attrib.vertex_weights.push(w);
                self.found_all_colors = false;
            }
            n if n >= 6 => {
                // x y z r g b, or x y z w r g b: color is the last three
                let mut rgb = [1.; 3];
                float::parse_vec3(&args[n - 3..], &mut rgb);
                self.attrib.colors.push(rgb);
                self.attrib.vertex_weights.push(1.);
            }
            _ => {
                self.attrib.vertex_weights.push(1.);
                self.found_all_colors = false;
            }
        }
    }

    /// `vn i j k`
    pub(super) fn push_vn(&mut self, args: &[&str]) {
        if args.len() < 3 {
            return;
        }
        let mut n = [0.; 3];
        float::parse_vec3(&args[..3], &mut n);
        self.attrib.normals.push(n);
    }

    /// `vt u [v] [w]`
    pub(super) fn push_vt(&mut self, args: &[&str]) {
        if args.is_empty() {
            return;
        }
        let mut uv = [0.; 2];
        float::parse_into(args.first(), &mut uv[0]);
        float::parse_into(args.get(1), &mut uv[1]);
        let mut w = 0.;
        float::parse_into(args.get(2), &mut w);
        self.attrib.texcoords.push(uv);
        self.attrib.texcoord_ws.push(w);
    }

    /// `vw vertex_id joint weight [joint weight]...`
    pub(super) fn push_vw(&mut self, args: &[&str]) {
        let Some(vertex_id) = args.first().and_then(|t| int::parse::<i32>(t)) else {
            return;
        };
        let mut weights = vec![];
        for pair in args[1..].chunks_exact(2) {
            let (Some(joint_id), Some(weight)) =
                (int::parse::<i32>(pair[0]), float::parse::<f32>(pair[1]))
            else {
                break;
            };
            weights.push(JointWeight { joint_id, weight });
        }
        self.attrib
            .skin_weights
            .push(SkinWeight { vertex_id, weights });
    }

    /// Finishes the pool. Colors are dropped unless every `v` line had one,
    /// or `retain_partial_colors` is set.
    pub(super) fn finish(mut self, retain_partial_colors: bool) -> Attrib {
        if !self.found_all_colors && !retain_partial_colors {
            self.attrib.colors.clear();
        }
        self.attrib
    }
}
