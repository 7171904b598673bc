use std::collections::HashMap;

pub type Vec2 = [f32; 2];
pub type Vec3 = [f32; 3];

// -----------------------------------------------------------------------------
// Geometry

/// A `(position, texcoord, normal)` reference of one face/line/point vertex.
///
/// Each component is a 0-based offset into the matching [`Attrib`] array, or
/// a negative value when the component was not given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs)]
pub struct Index {
    pub position: i32,
    pub texcoord: i32,
    pub normal: i32,
}

impl Index {
    /// Value stored in a component that was absent (or literally `0`) in the
    /// source token.
    pub const UNUSED: i32 = -1;

    #[must_use]
    pub const fn new(position: i32, texcoord: i32, normal: i32) -> Self {
        Self {
            position,
            texcoord,
            normal,
        }
    }

    #[must_use]
    pub fn position(&self) -> Option<usize> {
        usize::try_from(self.position).ok()
    }

    #[must_use]
    pub fn texcoord(&self) -> Option<usize> {
        usize::try_from(self.texcoord).ok()
    }

    #[must_use]
    pub fn normal(&self) -> Option<usize> {
        usize::try_from(self.normal).ok()
    }
}

/// Vertex attribute pool shared by every [`Shape`] of a decoded file.
///
/// The arrays are independent: `positions[i]` and `normals[i]` are not
/// related unless a face references both through an [`Index`].
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Attrib {
    /// `v` x, y, z.
    pub positions: Vec<Vec3>,
    /// `v` w. One entry per position, 1.0 unless given.
    pub vertex_weights: Vec<f32>,
    /// `vn` as written (not normalized).
    pub normals: Vec<Vec3>,
    /// `vt` u, v.
    pub texcoords: Vec<Vec2>,
    /// `vt` w. One entry per texcoord, 0.0 unless given.
    pub texcoord_ws: Vec<f32>,
    /// `v` r, g, b.
    ///
    /// Only guaranteed to be parallel to `positions` if every `v` line had a
    /// color; see [`Attrib::has_complete_colors`].
    pub colors: Vec<Vec3>,
    /// `vw` records.
    pub skin_weights: Vec<SkinWeight>,
}

impl Attrib {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if there is exactly one color per position.
    #[must_use]
    pub fn has_complete_colors(&self) -> bool {
        !self.colors.is_empty() && self.colors.len() == self.positions.len()
    }
}

/// Skin weights of one vertex (`vw` extension).
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct SkinWeight {
    /// Vertex id as written in the file.
    pub vertex_id: i32,
    pub weights: Vec<JointWeight>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub struct JointWeight {
    pub joint_id: i32,
    pub weight: f32,
}

/// Named partition of the decoded geometry.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Shape {
    /// Value of the last `g`/`o` directive before this shape was sealed.
    pub name: String,
    pub mesh: Mesh,
    pub lines: Lines,
    pub points: Points,
}

/// Polygon faces of a [`Shape`].
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Mesh {
    /// Face vertices, flattened. `num_face_vertices` tells how to chunk it.
    pub indices: Vec<Index>,
    /// Number of vertices of each face (always 3 if triangulated).
    pub num_face_vertices: Vec<u32>,
    /// Material of each face, `-1` if unresolved.
    pub material_ids: Vec<i32>,
    /// Smoothing group of each face, `0` if off.
    pub smoothing_group_ids: Vec<u32>,
    /// Per-face tags. Not populated by the decoder.
    pub tags: Vec<Tag>,
}

impl Mesh {
    /// Iterates over the vertex references of each face.
    ///
    /// # Panics
    ///
    /// Panics if the sum of `num_face_vertices` exceeds `indices.len()`,
    /// which never happens for a mesh produced by the decoder.
    pub fn faces(&self) -> impl ExactSizeIterator<Item = &[Index]> + '_ {
        let mut start = 0;
        self.num_face_vertices.iter().map(move |&n| {
            let face = &self.indices[start..start + n as usize];
            start += n as usize;
            face
        })
    }
}

/// Polylines of a [`Shape`] (`l`).
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Lines {
    pub indices: Vec<Index>,
    /// Number of vertices of each polyline.
    pub num_line_vertices: Vec<u32>,
}

/// Points of a [`Shape`] (`p`).
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Points {
    pub indices: Vec<Index>,
}

#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Tag {
    pub name: String,
    pub int_values: Vec<i32>,
    pub float_values: Vec<f32>,
    pub string_values: Vec<String>,
}

// -----------------------------------------------------------------------------
// Material

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Material {
    pub name: String,

    pub color: Colors,
    /// `Ns`
    pub shininess: f32,
    /// `Ni`
    pub ior: f32,
    /// `d`, or `1 - Tr`. 1 is opaque.
    pub dissolve: f32,
    /// `illum`
    pub illum: i32,

    pub texture: Textures,

    // PBR extension
    /// `Pr`
    pub roughness: f32,
    /// `Pm`
    pub metallic: f32,
    /// `Ps`
    pub sheen: f32,
    /// `Pc`
    pub clearcoat_thickness: f32,
    /// `Pcr`
    pub clearcoat_roughness: f32,
    /// `aniso`
    pub anisotropy: f32,
    /// `anisor`
    pub anisotropy_rotation: f32,

    /// Directives this decoder does not know, keyed by directive name.
    pub unknown_parameters: HashMap<String, String>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: Colors::default(),
            shininess: 1.,
            ior: 1.,
            dissolve: 1.,
            illum: 0,
            texture: Textures::default(),
            roughness: 0.,
            metallic: 0.,
            sheen: 0.,
            clearcoat_thickness: 0.,
            clearcoat_roughness: 0.,
            anisotropy: 0.,
            anisotropy_rotation: 0.,
            unknown_parameters: HashMap::new(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Colors {
    /// `Ka`
    pub ambient: Vec3,
    /// `Kd`
    pub diffuse: Vec3,
    /// `Ks`
    pub specular: Vec3,
    /// `Tf`/`Kt`
    pub transmittance: Vec3,
    /// `Ke`
    pub emission: Vec3,
}

#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Textures {
    /// `map_Ka`
    pub ambient: Texture,
    /// `map_Kd`
    pub diffuse: Texture,
    /// `map_Ks`
    pub specular: Texture,
    /// `map_Ns`
    pub specular_highlight: Texture,
    /// `map_bump`/`bump`
    pub bump: Texture,
    /// `map_disp`/`disp`
    pub displacement: Texture,
    /// `map_d`
    pub alpha: Texture,
    /// `refl`
    pub reflection: Texture,
    /// `map_Pr`
    pub roughness: Texture,
    /// `map_Pm`
    pub metallic: Texture,
    /// `map_Ps`
    pub sheen: Texture,
    /// `map_Ke`
    pub emissive: Texture,
    /// `norm`
    pub normal: Texture,
}

impl Textures {
    #[must_use]
    pub fn get(&self, slot: TextureSlot) -> &Texture {
        match slot {
            TextureSlot::Ambient => &self.ambient,
            TextureSlot::Diffuse => &self.diffuse,
            TextureSlot::Specular => &self.specular,
            TextureSlot::SpecularHighlight => &self.specular_highlight,
            TextureSlot::Bump => &self.bump,
            TextureSlot::Displacement => &self.displacement,
            TextureSlot::Alpha => &self.alpha,
            TextureSlot::Reflection => &self.reflection,
            TextureSlot::Roughness => &self.roughness,
            TextureSlot::Metallic => &self.metallic,
            TextureSlot::Sheen => &self.sheen,
            TextureSlot::Emissive => &self.emissive,
            TextureSlot::Normal => &self.normal,
        }
    }

    pub fn get_mut(&mut self, slot: TextureSlot) -> &mut Texture {
        match slot {
            TextureSlot::Ambient => &mut self.ambient,
            TextureSlot::Diffuse => &mut self.diffuse,
            TextureSlot::Specular => &mut self.specular,
            TextureSlot::SpecularHighlight => &mut self.specular_highlight,
            TextureSlot::Bump => &mut self.bump,
            TextureSlot::Displacement => &mut self.displacement,
            TextureSlot::Alpha => &mut self.alpha,
            TextureSlot::Reflection => &mut self.reflection,
            TextureSlot::Roughness => &mut self.roughness,
            TextureSlot::Metallic => &mut self.metallic,
            TextureSlot::Sheen => &mut self.sheen,
            TextureSlot::Emissive => &mut self.emissive,
            TextureSlot::Normal => &mut self.normal,
        }
    }

    /// Iterates over the slots that have a file name.
    pub fn iter(&self) -> impl Iterator<Item = (TextureSlot, &Texture)> + '_ {
        TextureSlot::ALL
            .iter()
            .map(move |&slot| (slot, self.get(slot)))
            .filter(|(_, t)| !t.name.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TextureSlot {
    Ambient,
    Diffuse,
    Specular,
    SpecularHighlight,
    Bump,
    Displacement,
    Alpha,
    Reflection,
    Roughness,
    Metallic,
    Sheen,
    Emissive,
    Normal,
}

impl TextureSlot {
    pub const ALL: [Self; 13] = [
        Self::Ambient,
        Self::Diffuse,
        Self::Specular,
        Self::SpecularHighlight,
        Self::Bump,
        Self::Displacement,
        Self::Alpha,
        Self::Reflection,
        Self::Roughness,
        Self::Metallic,
        Self::Sheen,
        Self::Emissive,
        Self::Normal,
    ];
}

/// A texture file reference and its options. An empty name means no texture.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct Texture {
    pub name: String,
    pub option: TextureOption,
}

/// Texture map options (`-o`, `-s`, `-clamp`, ...).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct TextureOption {
    /// `-type`
    pub texture_type: TextureType,
    /// `-boost`
    pub sharpness: f32,
    /// `-mm` base
    pub brightness: f32,
    /// `-mm` gain
    pub contrast: f32,
    /// `-o`
    pub origin_offset: Vec3,
    /// `-s`
    pub scale: Vec3,
    /// `-t`
    pub turbulence: Vec3,
    /// `-texres`, `-1` if not given.
    pub texture_resolution: i32,
    /// `-clamp`
    pub clamp: bool,
    /// `-imfchan`
    pub imfchan: char,
    /// `-blendu`
    pub blendu: bool,
    /// `-blendv`
    pub blendv: bool,
    /// `-bm`
    pub bump_multiplier: f32,
    /// `-colorspace`
    pub colorspace: String,
}

impl Default for TextureOption {
    fn default() -> Self {
        Self {
            texture_type: TextureType::None,
            sharpness: 1.,
            brightness: 0.,
            contrast: 1.,
            origin_offset: [0.; 3],
            scale: [1.; 3],
            turbulence: [0.; 3],
            texture_resolution: -1,
            clamp: false,
            imfchan: 'm',
            blendu: true,
            blendv: true,
            bump_multiplier: 1.,
            colorspace: String::new(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TextureType {
    #[default]
    None,
    Sphere,
    CubeTop,
    CubeBottom,
    CubeFront,
    CubeBack,
    CubeLeft,
    CubeRight,
}
