use anyhow::{anyhow, Context, Result};
use glutin::{
    config::ConfigTemplateBuilder,
    context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version},
    display::{GetGlDisplay, GlDisplay},
    prelude::*,
    surface::{Surface, WindowSurface},
};
use glutin_winit::{DisplayBuilder, GlWindow};
use log::{error, info, LevelFilter};
use raw_window_handle::HasRawWindowHandle;
use simple_logger::SimpleLogger;
use std::{
    ffi::{CStr, CString},
    num::NonZeroU32,
};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{EventLoop, EventLoopBuilder},
    window::{Window, WindowBuilder},
};

use hello_triangle::{
    app::FrameLoop,
    assets::shaders::ShaderSource,
    config::AppConfig,
    render::{mesh::TriangleMesh, pipeline::RenderPipeline, shaders::ShaderProgram},
};

struct App {
    // Field order is drop order: the program and buffers must be released
    // before the surface and context that own them.
    pipeline: RenderPipeline,
    gl_surface: Surface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    window: Window,
    frame_loop: FrameLoop,
}

impl App {
    fn new(config: AppConfig) -> Result<(Self, EventLoop<()>)> {
        SimpleLogger::new().with_level(LevelFilter::Info).init()?;
        info!("Initializing window and OpenGL context...");

        let event_loop = EventLoopBuilder::new().build()?;
        let window_builder = WindowBuilder::new()
            .with_title(&config.window_title)
            .with_inner_size(LogicalSize::new(config.window_width, config.window_height));

        let template = ConfigTemplateBuilder::new().with_alpha_size(8);

        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |configs| {
                configs
                    .reduce(|accum, config| {
                        if config.num_samples() > accum.num_samples() {
                            config
                        } else {
                            accum
                        }
                    })
                    .unwrap()
            })
            .map_err(|err| anyhow!("failed to create window: {err}"))?;

        let window = window.ok_or_else(|| anyhow!("display builder produced no window"))?;
        let raw_window_handle = window.raw_window_handle();

        let (major, minor) = config.gl_version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_window_handle));

        let gl_display = gl_config.display();

        let gl_context = unsafe {
            gl_display
                .create_context(&gl_config, &context_attributes)
                .context("failed to create OpenGL context")?
        };

        let attrs = window.build_surface_attributes(<_>::default());
        let gl_surface = unsafe {
            gl_display
                .create_window_surface(&gl_config, &attrs)
                .context("failed to create GL surface")?
        };

        let gl_context = gl_context
            .make_current(&gl_surface)
            .context("failed to make context current")?;

        // Load OpenGL functions
        gl::load_with(|symbol| {
            let symbol = CString::new(symbol).unwrap();
            gl_display.get_proc_address(symbol.as_c_str()) as *const _
        });

        if let Some(version) = shading_language_version() {
            info!("Supported GLSL version is {version}");
        }

        let source = ShaderSource::load(&config.shader_path)
            .with_context(|| format!("failed to load shader file {}", config.shader_path))?;
        let shader = ShaderProgram::build(&source).context("failed to build shader program")?;
        let mesh = TriangleMesh::new();
        let pipeline = RenderPipeline::new(shader, mesh, config.clear_color);

        Ok((
            Self {
                pipeline,
                gl_surface,
                gl_context,
                window,
                frame_loop: FrameLoop::new(),
            },
            event_loop,
        ))
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                self.frame_loop.handle_window_event(event)
            }
            WindowEvent::Resized(size) => {
                if let (Some(width), Some(height)) =
                    (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                {
                    self.gl_surface.resize(&self.gl_context, width, height);
                    unsafe {
                        gl::Viewport(0, 0, size.width as i32, size.height as i32);
                    }
                }
                false
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
                false
            }
            _ => false,
        }
    }

    fn render_frame(&self) {
        if !self.frame_loop.is_running() {
            return;
        }

        self.pipeline.draw_frame();
        if let Err(err) = self.gl_surface.swap_buffers(&self.gl_context) {
            error!("Failed to swap buffers: {err}");
        }
    }
}

fn shading_language_version() -> Option<String> {
    let ptr = unsafe { gl::GetString(gl::SHADING_LANGUAGE_VERSION) };
    if ptr.is_null() {
        return None;
    }
    let version = unsafe { CStr::from_ptr(ptr as *const _) };
    Some(version.to_string_lossy().into_owned())
}

fn main() -> Result<()> {
    let (mut app, event_loop) = App::new(AppConfig::default())?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => {
            if app.handle_window_event(&event) {
                elwt.exit();
            }
        }
        Event::AboutToWait => {
            app.window.request_redraw();
        }
        _ => (),
    })?;

    Ok(())
}
