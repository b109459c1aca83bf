//! WGSL for the instanced particle pipeline.
//!
//! One quad per particle, expanded in the vertex shader from the
//! instance's pixel-space position, cut to a circle in the fragment
//! shader. Alpha rides along per instance so a dim particle never
//! bleeds into the next draw.

pub(crate) const SHADER_SOURCE: &str = r#"
struct Uniforms {
    surface_size: vec2<f32>,
    particle_size: f32,
    _padding: f32,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
    @location(1) alpha: f32,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) particle_pos: vec2<f32>,
    @location(1) particle_color: vec3<f32>,
    @location(2) particle_alpha: f32,
) -> VertexOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );

    let quad_pos = quad_vertices[vertex_index];
    let corner = particle_pos + quad_pos * uniforms.particle_size;

    // Surface pixels to NDC, y flipped.
    let ndc = vec2<f32>(
        corner.x / uniforms.surface_size.x * 2.0 - 1.0,
        1.0 - corner.y / uniforms.surface_size.y * 2.0,
    );

    var out: VertexOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.color = particle_color;
    out.alpha = particle_alpha;
    out.uv = quad_pos;

    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    if length(in.uv) > 1.0 {
        discard;
    }
    return vec4<f32>(in.color, in.alpha);
}
"#;
