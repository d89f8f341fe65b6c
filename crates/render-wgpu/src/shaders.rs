/// WGSL shader for lit instanced boxes (cubes and the ground slab).
///
/// Blinn-Phong with an ambient term, one directional light and one point
/// light. `emissive.w` carries the specular exponent per instance.
pub const SCENE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    eye: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
    @location(7) emissive: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) color: vec4<f32>,
    @location(3) emissive: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_position = world_pos.xyz;
    out.world_normal = normalize(world_normal);
    out.color = instance.color;
    out.emissive = instance.emissive;
    return out;
}

const AMBIENT: f32 = 0.4;
const SUN_DIR: vec3<f32> = vec3<f32>(10.0, 15.0, 10.0);
const SUN_INTENSITY: f32 = 0.8;
const LAMP_POS: vec3<f32> = vec3<f32>(-5.0, 8.0, -5.0);
const LAMP_INTENSITY: f32 = 0.5;
const SPECULAR: vec3<f32> = vec3<f32>(0.016, 0.016, 0.016);

fn blinn_phong(n: vec3<f32>, l: vec3<f32>, v: vec3<f32>, shininess: f32) -> vec2<f32> {
    let diffuse = max(dot(n, l), 0.0);
    let h = normalize(l + v);
    let specular = select(0.0, pow(max(dot(n, h), 0.0), shininess), diffuse > 0.0);
    return vec2<f32>(diffuse, specular);
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.world_normal);
    let v = normalize(uniforms.eye.xyz - in.world_position);
    let shininess = in.emissive.w;

    let sun = blinn_phong(n, normalize(SUN_DIR), v, shininess) * SUN_INTENSITY;
    let lamp = blinn_phong(n, normalize(LAMP_POS - in.world_position), v, shininess) * LAMP_INTENSITY;

    let diffuse = AMBIENT + sun.x + lamp.x;
    let specular = SPECULAR * (sun.y + lamp.y);
    let rgb = in.color.rgb * diffuse + specular + in.emissive.rgb;
    return vec4<f32>(rgb, in.color.a);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_declares_entry_points() {
        assert!(SCENE_SHADER.contains("fn vs_main"));
        assert!(SCENE_SHADER.contains("fn fs_main"));
    }

    #[test]
    fn instance_locations_match_vertex_layout() {
        for location in 0..=7 {
            assert!(SCENE_SHADER.contains(&format!("@location({location})")));
        }
    }
}
