use crate::{
    utils::{float, int, tokenize},
    Texture, TextureType,
};

/// Parses `[options...] filename` (the part of a texture directive after the
/// directive name) into `texture`.
///
/// Options not present keep their current value. Any token that is not an
/// option or its operand is taken as the file name; if there are several,
/// the last one is used.
pub(crate) fn parse_texture_and_option(rest: &str, texture: &mut Texture) {
    let tokens = tokenize(rest);
    let option = &mut texture.option;
    let mut name = None;
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        i += 1;
        match token {
            "-blendu" => on_off(&tokens, &mut i, &mut option.blendu),
            "-blendv" => on_off(&tokens, &mut i, &mut option.blendv),
            "-clamp" => on_off(&tokens, &mut i, &mut option.clamp),
            "-boost" => float_operand(&tokens, &mut i, &mut option.sharpness),
            "-bm" => float_operand(&tokens, &mut i, &mut option.bump_multiplier),
            "-mm" => {
                if let Some(brightness) = tokens.get(i).and_then(|t| float::parse(t)) {
                    option.brightness = brightness;
                    i += 1;
                    if let Some(contrast) = tokens.get(i).and_then(|t| float::parse(t)) {
                        option.contrast = contrast;
                        i += 1;
                    }
                }
            }
            "-o" => vec3_operand(&tokens, &mut i, &mut option.origin_offset),
            "-s" => vec3_operand(&tokens, &mut i, &mut option.scale),
            "-t" => vec3_operand(&tokens, &mut i, &mut option.turbulence),
            "-texres" => {
                if let Some(res) = tokens.get(i).and_then(|t| int::parse::<i32>(t)) {
                    option.texture_resolution = res;
                }
                i += 1;
            }
            "-imfchan" => {
                if let Some(c) = tokens.get(i).and_then(|t| t.chars().next()) {
                    option.imfchan = c;
                }
                i += 1;
            }
            "-colorspace" => {
                if let Some(&colorspace) = tokens.get(i) {
                    option.colorspace = colorspace.to_owned();
                }
                i += 1;
            }
            "-type" => {
                if let Some(ty) = tokens.get(i).and_then(|t| texture_type(t)) {
                    option.texture_type = ty;
                }
                i += 1;
            }
            // TODO: stricter readers take the first name; check against real exporters
            _ => name = Some(token),
        }
    }
    if let Some(name) = name {
        texture.name = name.to_owned();
    }
}

/// `on` or anything else; a missing operand leaves `dst` unchanged.
fn on_off(tokens: &[&str], i: &mut usize, dst: &mut bool) {
    if let Some(&v) = tokens.get(*i) {
        *dst = v == "on";
    }
    *i += 1;
}

fn float_operand(tokens: &[&str], i: &mut usize, dst: &mut f32) {
    float::parse_into(tokens.get(*i), dst);
    *i += 1;
}

/// Consumes up to three numbers, stopping at the first token that is not one.
fn vec3_operand(tokens: &[&str], i: &mut usize, dst: &mut [f32; 3]) {
    for v in dst {
        match tokens.get(*i).and_then(|t| float::parse(t)) {
            Some(f) => {
                *v = f;
                *i += 1;
            }
            None => break,
        }
    }
}

fn texture_type(s: &str) -> Option<TextureType> {
    Some(match s {
        "sphere" => TextureType::Sphere,
        "cube_top" => TextureType::CubeTop,
        "cube_bottom" => TextureType::CubeBottom,
        "cube_front" => TextureType::CubeFront,
        "cube_back" => TextureType::CubeBack,
        "cube_left" => TextureType::CubeLeft,
        "cube_right" => TextureType::CubeRight,
        _ => return None,
    })
}
