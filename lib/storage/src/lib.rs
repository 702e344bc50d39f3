pub mod codec;
pub mod persistence;
pub mod session;

pub use codec::{decode, decode_str, encode, encode_to_string};
pub use persistence::{load_graph, save_graph};
pub use session::GraphSession;
