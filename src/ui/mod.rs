/// UI module exports
pub mod components;
pub mod tab_list;
