mod text_buffer;

pub use text_buffer::TextBuffer;
