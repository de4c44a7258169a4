//! Ten textured cubes spinning at staggered rates under a perspective
//! camera.

use anyhow::Result;
use glam::{Mat4, Vec3};
use glow::HasContext;

use lumen_demos::{asset_path, cube};
use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::device::GlInit;
use lumen_engine::input::Key;
use lumen_engine::logging::{LoggingConfig, init_logging};
use lumen_engine::render::{Color, Mesh, ShaderProgram, Texture2d, VertexLayout};
use lumen_engine::window::{Runtime, RuntimeConfig};

const CLEAR_COLOR: Color = Color::rgb(0.2, 0.3, 0.3);
const FOV_Y_DEGREES: f32 = 45.0;

struct Cubes {
    shader: ShaderProgram,
    mesh: Mesh,
    textures: [Option<Texture2d>; 2],
}

impl Cubes {
    fn new(gl: &glow::Context) -> Result<Self> {
        // Cubes overlap in depth; without the depth test the draw order wins.
        unsafe { gl.enable(glow::DEPTH_TEST) };

        let shader = ShaderProgram::from_paths(
            gl,
            asset_path("shaders/cube.vert"),
            asset_path("shaders/cube.frag"),
        )?;
        let mesh = Mesh::new(gl, &cube::VERTICES, &VertexLayout::position_uv())?;

        let textures = [
            load_texture(gl, "assets/container.png"),
            load_texture(gl, "assets/awesomeface.png"),
        ];

        shader.set_int(gl, "tex0", 0);
        shader.set_int(gl, "tex1", 1);

        Ok(Self { shader, mesh, textures })
    }
}

impl App for Cubes {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if ctx.input.key_down(Key::Escape) {
            return AppControl::Exit;
        }

        ctx.clear_with_depth(CLEAR_COLOR);

        for (unit, texture) in self.textures.iter().enumerate() {
            if let Some(texture) = texture {
                texture.bind(ctx.gl, unit as u32);
            }
        }

        self.shader.activate(ctx.gl);

        let projection = Mat4::perspective_rh_gl(
            FOV_Y_DEGREES.to_radians(),
            ctx.aspect_ratio(),
            0.1,
            100.0,
        );
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0));
        self.shader.set_mat4(ctx.gl, "projection", &projection);
        self.shader.set_mat4(ctx.gl, "view", &view);

        for index in 0..cube::OFFSETS.len() {
            let model = cube::model_matrix(index, ctx.time.elapsed);
            self.shader.set_mat4(ctx.gl, "model", &model);
            self.mesh.draw(ctx.gl);
        }

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
            title: "lumen - cubes".to_string(),
            ..RuntimeConfig::default()
        },
        GlInit::default(),
        Cubes::new,
    )
}
