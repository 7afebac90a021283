//! 页面视图

pub mod form;
