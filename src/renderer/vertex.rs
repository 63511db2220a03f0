//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 8-bit RGBA colour
pub type Rgba8 = [u8; 4];

/// 2D vertex with court-space position and 8-bit colour
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Rgba8,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Rgba8) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Unorm8x4,
                },
            ],
        }
    }
}

/// Colours for game elements
pub mod colors {
    use super::Rgba8;
    use crate::sim::Side;

    /// Unpack `0xRRGGBBAA`
    pub const fn hex(rgba: u32) -> Rgba8 {
        [
            (rgba >> 24) as u8,
            (rgba >> 16) as u8,
            (rgba >> 8) as u8,
            rgba as u8,
        ]
    }

    pub const BACKGROUND: Rgba8 = hex(0x171714ff);
    pub const FOREGROUND: Rgba8 = hex(0xffffffff);
    pub const SHADOW: Rgba8 = hex(0x604d29ff);
    pub const PLAYER1: Rgba8 = hex(0x008decff);
    pub const PLAYER2: Rgba8 = hex(0xec0040ff);
    pub const PLAYER1_TRAIL: Rgba8 = hex(0x008dec88);
    pub const PLAYER2_TRAIL: Rgba8 = hex(0xec004088);
    /// Trail of a ball no paddle has touched yet
    pub const NEUTRAL_TRAIL: Rgba8 = hex(0x000000ff);

    /// Trail gradient, oldest slot last
    #[rustfmt::skip]
    pub const RAINBOW: [Rgba8; 22] = [
        hex(0x604d29ff), hex(0x624f29fc), hex(0x69542df2),
        hex(0x6a552df1), hex(0x6b562ef0), hex(0x6b562ef0),
        hex(0x6d572eed), hex(0x6f592feb), hex(0x725b31e7),
        hex(0x745d31e3), hex(0x755e32e0), hex(0x765f33de),
        hex(0x7a6234d8), hex(0x826838ca), hex(0x977840a4),
        hex(0x96773fa5), hex(0xa07f4493), hex(0xa1814590),
        hex(0x9e7e4496), hex(0xa6844887), hex(0xa9864884),
        hex(0xad8a4a7c),
    ];

    pub fn paddle(side: Side) -> Rgba8 {
        match side {
            Side::Left => PLAYER1,
            Side::Right => PLAYER2,
        }
    }

    pub fn trail(owner: Option<Side>) -> Rgba8 {
        match owner {
            Some(Side::Left) => PLAYER1_TRAIL,
            Some(Side::Right) => PLAYER2_TRAIL,
            None => NEUTRAL_TRAIL,
        }
    }

}
