pub mod batch_executor;
pub mod infrastructure;
pub mod output_naming;
pub mod path_expansion;
pub mod round_base64_use_case;
pub mod round_image_use_case;
