pub mod compiler;
pub mod text;

pub use compiler::{
    compile_constituency, compile_msp, compile_region, compile_region_constituency_list, Compiled,
};
pub use text::{human_date, join_spoken};
