//! 2D texture loading and upload.

use std::path::{Path, PathBuf};

use glow::{HasContext, PixelUnpackData};
use thiserror::Error;

/// Failure while loading a texture image.
///
/// Not fatal by design: the demos log it and draw with the texture unset.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to load image {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to allocate a GL texture: {0}")]
    Create(String),
}

/// A GPU-resident 2D texture with mipmaps.
pub struct Texture2d {
    texture: glow::Texture,
}

impl Texture2d {
    /// Decodes an image file and uploads it.
    ///
    /// The image is flipped vertically before upload (GL samples with a
    /// bottom-left origin, decoders produce rows top-down) and uploaded as
    /// RGB8 or RGBA8 according to the source's channel count. Wrapping is
    /// REPEAT on both axes, filtering LINEAR with mipmap-linear minification.
    pub fn from_path(gl: &glow::Context, path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|source| TextureError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .flipv();

        let width = img.width() as i32;
        let height = img.height() as i32;
        let (format, data) = if img.color().has_alpha() {
            (glow::RGBA, img.to_rgba8().into_raw())
        } else {
            (glow::RGB, img.to_rgb8().into_raw())
        };

        unsafe {
            let texture = gl.create_texture().map_err(TextureError::Create)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));

            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);

            // RGB rows are 3-byte aligned; the default unpack alignment of 4
            // would shear any width not divisible by 4.
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                format as i32,
                width,
                height,
                0,
                format,
                glow::UNSIGNED_BYTE,
                PixelUnpackData::Slice(Some(&data)),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);

            log::debug!("loaded texture {} ({width}x{height})", path.display());

            Ok(Self { texture })
        }
    }

    /// Binds the texture to the given texture unit (0-based).
    pub fn bind(&self, gl: &glow::Context, unit: u32) {
        unsafe {
            gl.active_texture(glow::TEXTURE0 + unit);
            gl.bind_texture(glow::TEXTURE_2D, Some(self.texture));
        }
    }

    /// Deletes the texture object. Call before the context is torn down.
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_texture(self.texture) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_the_path() {
        let err = TextureError::Decode {
            path: PathBuf::from("assets/container.jpg"),
            source: image::ImageError::IoError(std::io::Error::from(
                std::io::ErrorKind::NotFound,
            )),
        };
        assert!(err.to_string().contains("assets/container.jpg"));
    }
}
