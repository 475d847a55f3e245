/// Process exit codes shared by `bash-buddy` and `tf-buddy`.
pub mod exit {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}
