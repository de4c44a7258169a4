//! The minimal demo: inline shader sources, one orange triangle.

use anyhow::Result;

use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::device::GlInit;
use lumen_engine::input::Key;
use lumen_engine::logging::{LoggingConfig, init_logging};
use lumen_engine::render::{Color, Mesh, ShaderProgram, VertexLayout};
use lumen_engine::window::{Runtime, RuntimeConfig};

const CLEAR_COLOR: Color = Color::rgb(0.2, 0.3, 0.3);

const VERTEX_SRC: &str = r#"
#version 330 core
layout (location = 0) in vec3 aPos;

void main() {
    gl_Position = vec4(aPos, 1.0);
}
"#;

const FRAGMENT_SRC: &str = r#"
#version 330 core
out vec4 FragColor;

void main() {
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
"#;

#[rustfmt::skip]
const VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0, // bottom left
     0.5, -0.5, 0.0, // bottom right
     0.0,  0.5, 0.0, // top
];

struct HelloTriangle {
    shader: ShaderProgram,
    mesh: Mesh,
}

impl HelloTriangle {
    fn new(gl: &glow::Context) -> Result<Self> {
        let shader = ShaderProgram::from_sources(gl, VERTEX_SRC, FRAGMENT_SRC)?;
        let mesh = Mesh::new(gl, &VERTICES, &VertexLayout::position())?;
        Ok(Self { shader, mesh })
    }
}

impl App for HelloTriangle {
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
            title: "lumen - hello triangle".to_string(),
            ..RuntimeConfig::default()
        },
        GlInit::default(),
        HelloTriangle::new,
    )
}
