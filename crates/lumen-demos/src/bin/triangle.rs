//! File-based shaders: a triangle with per-vertex colors interpolated by the
//! pipeline.

use anyhow::Result;

use lumen_demos::asset_path;
use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::device::GlInit;
use lumen_engine::input::Key;
use lumen_engine::logging::{LoggingConfig, init_logging};
use lumen_engine::render::{Color, Mesh, ShaderProgram, VertexLayout};
use lumen_engine::window::{Runtime, RuntimeConfig};

const CLEAR_COLOR: Color = Color::rgb(0.2, 0.3, 0.3);

#[rustfmt::skip]
const VERTICES: [f32; 18] = [
    // position         // color
     0.5, -0.5, 0.0,    1.0, 0.0, 0.0, // bottom right, red
    -0.5, -0.5, 0.0,    0.0, 1.0, 0.0, // bottom left, green
     0.0,  0.5, 0.0,    0.0, 0.0, 1.0, // top, blue
];

struct Triangle {
    shader: ShaderProgram,
    mesh: Mesh,
}

impl Triangle {
    fn new(gl: &glow::Context) -> Result<Self> {
        // An unusable program is fatal here: there is nothing else to draw.
        let shader = ShaderProgram::from_paths(
            gl,
            asset_path("shaders/triangle.vert"),
            asset_path("shaders/triangle.frag"),
        )?;
        let mesh = Mesh::new(gl, &VERTICES, &VertexLayout::position_color())?;
        Ok(Self { shader, mesh })
    }
}

impl App for Triangle {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if ctx.input.key_down(Key::Escape) {
            return AppControl::Exit;
        }

        ctx.clear(CLEAR_COLOR);
        self.shader.activate(ctx.gl);
        self.mesh.draw(ctx.gl);

        AppControl::Continue
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Runtime::run(
        RuntimeConfig {
            title: "lumen - triangle".to_string(),
            ..RuntimeConfig::default()
        },
        GlInit::default(),
        Triangle::new,
    )
}
