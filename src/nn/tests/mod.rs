mod layer_input;
mod layer_kind;
