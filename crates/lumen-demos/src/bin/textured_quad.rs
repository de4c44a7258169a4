//! Indexed quad sampling two textures blended in the fragment shader.

use anyhow::Result;

use lumen_demos::asset_path;
use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::device::GlInit;
use lumen_engine::input::Key;
use lumen_engine::logging::{LoggingConfig, init_logging};
use lumen_engine::render::{Color, Mesh, ShaderProgram, Texture2d, VertexLayout};
use lumen_engine::window::{Runtime, RuntimeConfig};

const CLEAR_COLOR: Color = Color::rgb(0.2, 0.3, 0.3);

#[rustfmt::skip]
const VERTICES: [f32; 32] = [
    // position         // color          // uv
     0.5,  0.5, 0.0,    1.0, 0.0, 0.0,    1.0, 1.0, // top right
     0.5, -0.5, 0.0,    0.0, 1.0, 0.0,    1.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,    0.0, 0.0, 1.0,    0.0, 0.0, // bottom left
    -0.5,  0.5, 0.0,    1.0, 1.0, 0.0,    0.0, 1.0, // top left
];

#[rustfmt::skip]
const INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

struct TexturedQuad {
    shader: ShaderProgram,
    mesh: Mesh,
    textures: [Option<Texture2d>; 2],
}

impl TexturedQuad {
    fn new(gl: &glow::Context) -> Result<Self> {
        let shader = ShaderProgram::from_paths(
            gl,
            asset_path("shaders/quad.vert"),
            asset_path("shaders/quad.frag"),
        )?;
        let mesh = Mesh::with_indices(gl, &VERTICES, &INDICES, &VertexLayout::position_color_uv())?;

        // A missing image is not fatal: draw with the texture unset.
        let textures = [
            load_texture(gl, "assets/container.png"),
            load_texture(gl, "assets/awesomeface.png"),
        ];

        // Tell the sampler uniforms which texture unit to read.
        shader.set_int(gl, "tex0", 0);
        shader.set_int(gl, "tex1", 1);
        shader.set_float(gl, "blend", 0.2);

        Ok(Self { shader, mesh, textures })
    }
}

impl App for TexturedQuad {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if ctx.input.key_down(Key::Escape) {
            return AppControl::Exit;
        }

        ctx.clear(CLEAR_COLOR);

        for (unit, texture) in self.textures.iter().enumerate() {
            if let Some(texture) = texture {
                texture.bind(ctx.gl, unit as u32);
            }
        }

        self.shader.activate(ctx.gl);
        self.mesh.draw(ctx.gl);

        AppControl::Continue
    }
}

fn load_texture(gl: &glow::Context, relative: &str) -> Option<Texture2d> {
    match Texture2d::from_path(gl, asset_path(relative)) {
        Ok(texture) => Some(texture),
        Err(e) => {
            log::error!("texture unavailable: {e}");
            None
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Runtime::run(
        RuntimeConfig {
            title: "lumen - textured quad".to_string(),
            ..RuntimeConfig::default()
        },
        GlInit::default(),
        TexturedQuad::new,
    )
}
