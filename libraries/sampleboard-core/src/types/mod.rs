mod audio;
mod post;
mod sample;

pub use audio::{DecodedBuffer, SampleRate};
pub use post::{Post, UserId};
pub use sample::AudioSampleDescriptor;
