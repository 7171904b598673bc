use std::{ffi::OsStr, fmt, fs, io, path::Path};

use crate::{
    error::{Error, Result},
    mtl::{self, MtlData},
    obj::{self, DecodeOptions, ObjData},
};

type Reader<B> = fn(&Path) -> io::Result<B>;

/// Loads OBJ files and the material libraries they reference.
pub struct Loader<B = Vec<u8>> {
    reader: Reader<B>,
    options: DecodeOptions,
}

fn default_reader(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}

impl Default for Loader<Vec<u8>> {
    fn default() -> Self {
        Self::with_custom_reader(default_reader)
    }
}

impl<B: AsRef<[u8]>> Loader<B> {
    /// Sets whether or not to fan-triangulate faces with more than three
    /// vertices.
    ///
    /// Default: `true`
    #[must_use]
    pub fn triangulate(mut self, enable: bool) -> Self {
        self.options.triangulate = enable;
        self
    }

    /// Sets whether or not to keep vertex colors when only some `v` lines
    /// have them.
    ///
    /// Default: `true`
    #[must_use]
    pub fn retain_partial_vertex_colors(mut self, enable: bool) -> Self {
        self.options.retain_partial_vertex_colors = enable;
        self
    }

    /// Use the given function as a file reader of this loader.
    ///
    /// Default: [`std::fs::read`]
    ///
    /// # Example
    ///
    /// This is useful if you want to load a model from a location that the
    /// default reader does not support.
    ///
    /// ```
    /// use obj_loader::Loader;
    /// use std::fs;
    ///
    /// let loader = Loader::default().custom_reader(|path| {
    ///     match path.to_str() {
    ///         Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
    ///             // Fetch online file
    ///             // ...
    /// #           unimplemented!()
    ///         }
    ///         _ => fs::read(path), // Otherwise, read from a file (same as the default reader)
    ///     }
    /// });
    /// ```
    #[must_use]
    pub fn custom_reader(mut self, reader: Reader<B>) -> Self {
        self.reader = reader;
        self
    }

    /// Creates a new loader with the given file reader.
    ///
    /// This is similar to [`Loader::default().custom_reader()`](Self::custom_reader),
    /// but the reader can return a non-`Vec<u8>` type.
    ///
    /// ```
    /// use obj_loader::Loader;
    ///
    /// let loader = Loader::with_custom_reader(|path| std::fs::read_to_string(path));
    /// ```
    #[must_use]
    pub fn with_custom_reader(reader: Reader<B>) -> Self {
        Self {
            reader,
            options: DecodeOptions::default(),
        }
    }

    /// Loads an OBJ file.
    ///
    /// Material libraries are looked up relative to the directory of `path`.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<ObjData> {
        self.load_(path.as_ref())
    }
    fn load_(&self, path: &Path) -> Result<ObjData> {
        let bytes = self.read(path)?;
        self.load_from_slice_(bytes.as_ref(), path)
    }
    /// Decodes `bytes` as the content of the OBJ file at `path`.
    ///
    /// `path` is used to check the file type and to locate material
    /// libraries; it is not read.
    pub fn load_from_slice<P: AsRef<Path>>(&self, bytes: &[u8], path: P) -> Result<ObjData> {
        self.load_from_slice_(bytes, path.as_ref())
    }
    fn load_from_slice_(&self, bytes: &[u8], path: &Path) -> Result<ObjData> {
        match path.extension().and_then(OsStr::to_str) {
            Some("obj" | "OBJ") => {}
            _ => return Err(Error::UnsupportedFileType(path.to_owned())),
        }
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        let data = obj::from_slice(bytes, &self.options, |name: &str| {
            self.load_mtl_(&dir.join(name))
        })?;
        tracing::debug!(
            path = %path.display(),
            shapes = data.shapes.len(),
            materials = data.materials.len(),
            ok = data.is_ok(),
            "loaded OBJ"
        );
        Ok(data)
    }

    /// Loads an MTL file.
    pub fn load_mtl<P: AsRef<Path>>(&self, path: P) -> Result<MtlData> {
        self.load_mtl_(path.as_ref())
    }
    fn load_mtl_(&self, path: &Path) -> Result<MtlData> {
        let bytes = self.read(path)?;
        mtl::from_slice(bytes.as_ref())
    }
    /// Decodes `bytes` as the content of an MTL file.
    pub fn load_mtl_from_slice(&self, bytes: &[u8]) -> Result<MtlData> {
        mtl::from_slice(bytes)
    }

    fn read(&self, path: &Path) -> Result<B> {
        (self.reader)(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })
    }
}

impl<B> fmt::Debug for Loader<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loader")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_reader(path: &Path) -> io::Result<&'static [u8]> {
        match path.to_str() {
            Some("dir/a.obj") => Ok(b"mtllib a.mtl\nv 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\nusemtl red\nf 1 2 4 3\n"),
            Some("dir/a.mtl") => Ok(b"newmtl red\nKd 1 0 0\n"),
            _ => Err(io::ErrorKind::NotFound.into()),
        }
    }

    #[test]
    fn custom_reader() {
        let loader = Loader::with_custom_reader(memory_reader);
        let data = loader.load("dir/a.obj").unwrap();
        assert!(data.is_ok());
        assert_eq!(data.materials[0].name, "red");
        assert_eq!(data.shapes[0].mesh.material_ids, [0, 0]);

        let data = loader.triangulate(false).load("dir/a.obj").unwrap();
        assert_eq!(data.shapes[0].mesh.num_face_vertices, [4]);
    }

    #[test]
    fn errors() {
        let loader = Loader::with_custom_reader(memory_reader);
        assert!(matches!(
            loader.load("dir/a.stl"),
            Err(Error::Io { .. })
        ));
        assert!(matches!(
            loader.load_from_slice(b"", "a.stl"),
            Err(Error::UnsupportedFileType(_))
        ));
        assert!(matches!(
            loader.load_mtl("dir/none.mtl"),
            Err(Error::Io { .. })
        ));
        let data = loader
            .load_from_slice(b"mtllib none.mtl\n", "dir/b.obj")
            .unwrap();
        assert!(!data.is_ok());
    }
}
