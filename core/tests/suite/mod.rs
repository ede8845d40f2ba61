mod containers;
mod nesting;
