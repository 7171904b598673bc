//! [Wavefront MTL] (.mtl) decoder.
//!
//! [Wavefront MTL]: https://paulbourke.net/dataformats/mtl/

mod texture;

use std::{collections::HashMap, mem};

use self::texture::parse_texture_and_option;
use crate::{
    error::Result,
    utils::{bytes::Lines, float, int, rest_of_line, tokenize, utf16::decode_text},
    Diagnostics, Material, TextureSlot,
};

/// Result of an MTL decode.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct MtlData {
    /// Materials in file order.
    pub materials: Vec<Material>,
    /// Material name to index into `materials`. The first definition of a
    /// name wins.
    pub material_map: HashMap<String, usize>,
    pub diagnostics: Diagnostics,
}

/// Decodes bytes of Wavefront MTL text.
pub fn from_slice(bytes: &[u8]) -> Result<MtlData> {
    let text = decode_text(bytes)?;
    Ok(from_str(&text))
}

/// Decodes Wavefront MTL text.
///
/// The result always contains at least one material: directives before the
/// first `newmtl` (or a text with no `newmtl` at all) go to a material with
/// an empty name.
#[must_use]
pub fn from_str(text: &str) -> MtlData {
    let mut p = Parser::default();
    for (line_no, line) in Lines::new(text) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        p.line(line_no, line);
    }
    p.seal();
    tracing::debug!(
        materials = p.data.materials.len(),
        warnings = p.data.diagnostics.warnings().lines().count(),
        "decoded MTL"
    );
    p.data
}

#[derive(Default)]
struct Parser {
    data: MtlData,
    /// Material under construction.
    live: Material,
    /// Set once the first `newmtl` has been seen.
    started: bool,
    has_d: bool,
    has_tr: bool,
    has_kd: bool,
}

impl Parser {
    fn line(&mut self, line_no: usize, line: &str) {
        let tokens = tokenize(line);
        let key = tokens[0];
        let m = &mut self.live;
        match (key, tokens.len()) {
            ("newmtl", 2..) => {
                if self.started || !m.name.is_empty() {
                    self.seal();
                }
                self.live = Material::default();
                self.started = true;
                self.has_d = false;
                self.has_tr = false;
                self.has_kd = false;
                self.live.name = rest_of_line(line, key).to_owned();
            }

            ("Ka" | "ka", 4..) => float::parse_vec3(&tokens[1..], &mut m.color.ambient),
            ("Kd" | "kd", 4..) => {
                float::parse_vec3(&tokens[1..], &mut m.color.diffuse);
                self.has_kd = true;
            }
            ("Ks" | "ks", 4..) => float::parse_vec3(&tokens[1..], &mut m.color.specular),
            ("Ke", 4..) => float::parse_vec3(&tokens[1..], &mut m.color.emission),
            ("Tf" | "Kt", 4..) => float::parse_vec3(&tokens[1..], &mut m.color.transmittance),

            ("Ns", 2..) => {
                float::parse_into(tokens.get(1), &mut m.shininess);
            }
            ("Ni", 2..) => {
                float::parse_into(tokens.get(1), &mut m.ior);
            }
            ("illum", 2..) => {
                if let Some(illum) = int::parse::<i32>(tokens[1]) {
                    m.illum = illum;
                }
            }
            ("d", 2..) => {
                float::parse_into(tokens.get(1), &mut m.dissolve);
                if self.has_tr {
                    self.diagnostics_conflict(line_no);
                }
                self.has_d = true;
            }
            ("Tr", 2..) => {
                if self.has_d {
                    self.diagnostics_conflict(line_no);
                } else {
                    let mut tr = 0_f32;
                    if float::parse_into(tokens.get(1), &mut tr) {
                        m.dissolve = 1. - tr;
                    }
                }
                self.has_tr = true;
            }

            // PBR extension
            ("Pr", 2..) => {
                float::parse_into(tokens.get(1), &mut m.roughness);
            }
            ("Pm", 2..) => {
                float::parse_into(tokens.get(1), &mut m.metallic);
            }
            ("Ps", 2..) => {
                float::parse_into(tokens.get(1), &mut m.sheen);
            }
            ("Pc", 2..) => {
                float::parse_into(tokens.get(1), &mut m.clearcoat_thickness);
            }
            ("Pcr", 2..) => {
                float::parse_into(tokens.get(1), &mut m.clearcoat_roughness);
            }
            ("aniso", 2..) => {
                float::parse_into(tokens.get(1), &mut m.anisotropy);
            }
            ("anisor", 2..) => {
                float::parse_into(tokens.get(1), &mut m.anisotropy_rotation);
            }

            _ => {
                if let Some(slot) = texture_slot(key) {
                    if slot == TextureSlot::Diffuse && !self.has_kd {
                        m.color.diffuse = [0.6; 3];
                    }
                    parse_texture_and_option(rest_of_line(line, key), m.texture.get_mut(slot));
                } else if tokens.len() >= 2 {
                    m.unknown_parameters
                        .insert(key.to_owned(), rest_of_line(line, key).to_owned());
                }
            }
        }
    }

    fn diagnostics_conflict(&mut self, line_no: usize) {
        let name = &self.live.name;
        self.data.diagnostics.warn(
            line_no,
            format_args!("both 'd' and 'Tr' found for material '{name}'; using 'd'"),
        );
    }

    /// Moves the live material to the output.
    fn seal(&mut self) {
        let material = mem::take(&mut self.live);
        let id = self.data.materials.len();
        self.data
            .material_map
            .entry(material.name.clone())
            .or_insert(id);
        self.data.materials.push(material);
    }
}

fn texture_slot(key: &str) -> Option<TextureSlot> {
    Some(match key {
        "map_Ka" => TextureSlot::Ambient,
        "map_Kd" => TextureSlot::Diffuse,
        "map_Ks" => TextureSlot::Specular,
        "map_Ns" => TextureSlot::SpecularHighlight,
        "map_d" => TextureSlot::Alpha,
        "map_bump" | "map_Bump" | "bump" => TextureSlot::Bump,
        "map_disp" | "map_Disp" | "disp" => TextureSlot::Displacement,
        "refl" => TextureSlot::Reflection,
        "map_Pr" => TextureSlot::Roughness,
        "map_Pm" => TextureSlot::Metallic,
        "map_Ps" => TextureSlot::Sheen,
        "map_Ke" => TextureSlot::Emissive,
        "norm" => TextureSlot::Normal,
        _ => return None,
    })
}
