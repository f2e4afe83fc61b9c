//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod song_generator;

pub use song_generator::{
    CustomGenerateRequest, ExtendAudioRequest, GenerateRequest, SongGeneratorPort, UpstreamError,
};
