mod shared;

use std::path::Path;

use fs_err as fs;
use obj_loader::{Error, Index, Loader, TextureType};

const CUBE_OBJ: &str = "\
# unit cube
mtllib cube.mtl

v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
v 1 0 1
v 1 1 1
v 0 1 1
vn 0 0 -1
vt 0 0
vt 1 0
vt 1 1
vt 0 1

usemtl red
g front
f 1/1/1 4/4/1 3/3/1 2/2/1
g back
f 5/1 6/2 7/3 8/4
usemtl blue
g left
f 1 5 8 4
g right
f 2 3 7 6
g top
f 4 8 7 3
g bottom
f 1 2 6 5
";

const CUBE_MTL: &str = "\
newmtl red
Kd 1 0 0
map_Kd -s 2 2 red.png

newmtl blue
Kd 0 0 1
Tr 0.25
bump -bm 0.5 -type sphere blue_bump.png
";

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn cube() {
    shared::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "cube.obj", CUBE_OBJ);
    write(dir.path(), "cube.mtl", CUBE_MTL);

    let data = Loader::default().load(dir.path().join("cube.obj")).unwrap();
    assert!(data.is_ok(), "{}", data.diagnostics.errors());
    assert!(!data.diagnostics.has_warnings(), "{}", data.diagnostics.warnings());

    assert_eq!(data.attrib.positions.len(), 8);
    assert_eq!(data.attrib.normals.len(), 1);
    assert_eq!(data.attrib.texcoords.len(), 4);

    let names: Vec<_> = data.shapes.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["front", "back", "left", "right", "top", "bottom"]);
    for shape in &data.shapes {
        assert_eq!(shape.mesh.indices.len(), 6);
        assert_eq!(shape.mesh.num_face_vertices, [3, 3]);
        assert_eq!(shape.mesh.smoothing_group_ids, [0, 0]);
        assert!(shape.lines.indices.is_empty());
        assert!(shape.points.indices.is_empty());
    }
    assert_eq!(data.shapes[0].mesh.material_ids, [0, 0]);
    assert_eq!(data.shapes[1].mesh.material_ids, [0, 0]);
    assert_eq!(data.shapes[2].mesh.material_ids, [1, 1]);

    let front = &data.shapes[0].mesh;
    assert_eq!(front.indices[0], Index::new(0, 0, 0));
    assert_eq!(front.indices[1], Index::new(3, 3, 0));
    assert_eq!(front.indices[2], Index::new(2, 2, 0));
    assert_eq!(front.indices[3], Index::new(0, 0, 0));
    assert_eq!(front.indices[5], Index::new(1, 1, 0));
    assert_eq!(data.shapes[1].mesh.indices[0], Index::new(4, 0, -1));
    assert_eq!(data.shapes[2].mesh.indices[0], Index::new(0, -1, -1));

    assert_eq!(data.materials.len(), 2);
    let red = &data.materials[data.material_map["red"]];
    assert_eq!(red.color.diffuse, [1., 0., 0.]);
    assert_eq!(red.texture.diffuse.name, "red.png");
    assert_eq!(red.texture.diffuse.option.scale, [2., 2., 1.]);
    let blue = &data.materials[data.material_map["blue"]];
    assert_eq!(blue.dissolve, 0.75);
    assert_eq!(blue.texture.bump.name, "blue_bump.png");
    assert_eq!(blue.texture.bump.option.bump_multiplier, 0.5);
    assert_eq!(blue.texture.bump.option.texture_type, TextureType::Sphere);
}

#[test]
fn missing_material_library() {
    shared::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "a.obj",
        "mtllib missing.mtl present.mtl\nv 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl m\nf 1 2 3\n",
    );
    write(dir.path(), "present.mtl", "newmtl m\nKd 0.5 0.5 0.5\n");

    let data = Loader::default().load(dir.path().join("a.obj")).unwrap();
    assert!(!data.is_ok());
    let errors = data.diagnostics.errors();
    assert_eq!(errors.lines().count(), 1);
    assert!(errors.starts_with("line 1: failed to load material library [missing.mtl]"));
    assert_eq!(data.materials.len(), 1);
    assert_eq!(data.shapes[0].mesh.material_ids, [0]);
}

#[test]
fn no_triangulation() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "cube.obj", CUBE_OBJ);
    write(dir.path(), "cube.mtl", CUBE_MTL);

    let data = Loader::default()
        .triangulate(false)
        .load(dir.path().join("cube.obj"))
        .unwrap();
    for shape in &data.shapes {
        assert_eq!(shape.mesh.num_face_vertices, [4]);
        assert_eq!(shape.mesh.faces().len(), 1);
    }
}

#[test]
fn partial_vertex_colors() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "c.obj", "v 0 0 0 1 0 0\nv 1 0 0\nv 0 1 0 0 0 1\np 1 2 3\n");
    let path = dir.path().join("c.obj");

    let data = Loader::default().load(&path).unwrap();
    assert_eq!(data.attrib.colors.len(), 2);
    assert!(!data.attrib.has_complete_colors());

    let data = Loader::default()
        .retain_partial_vertex_colors(false)
        .load(&path)
        .unwrap();
    assert!(data.attrib.colors.is_empty());
    assert_eq!(data.shapes[0].points.indices.len(), 3);
}

#[test]
fn utf16_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "v 1 2 3\nf 1 1 1\n".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(dir.path().join("u.obj"), bytes).unwrap();

    let data = Loader::default().load(dir.path().join("u.obj")).unwrap();
    assert_eq!(data.attrib.positions, [[1., 2., 3.]]);
    assert_eq!(data.shapes.len(), 1);
}

#[test]
fn load_errors() {
    let dir = tempfile::tempdir().unwrap();
    let loader = Loader::default();

    let err = loader.load(dir.path().join("none.obj")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("none.obj"));

    write(dir.path(), "model.stl", "solid\n");
    assert!(matches!(
        loader.load(dir.path().join("model.stl")),
        Err(Error::UnsupportedFileType(_))
    ));

    fs::write(dir.path().join("w.obj"), [0x00, 0x00, 0xFE, 0xFF, 0, 0, 0, b'v']).unwrap();
    assert!(matches!(
        loader.load(dir.path().join("w.obj")),
        Err(Error::UnsupportedEncoding(_))
    ));
}

#[test]
fn standalone_mtl() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "cube.mtl", CUBE_MTL);
    let data = Loader::default().load_mtl(dir.path().join("cube.mtl")).unwrap();
    let names: Vec<_> = data.materials.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["red", "blue"]);
    assert_eq!(
        data,
        Loader::default().load_mtl_from_slice(CUBE_MTL.as_bytes()).unwrap()
    );
}
