use crate::error::TaskdashError;

pub type TaskdashResult<T> = Result<T, TaskdashError>;
