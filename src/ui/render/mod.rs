mod all;
mod footer;
mod log;
mod pagination;
mod popup;
mod search;
mod table;

use self::log::log;
use super::*;
use footer::footer;
use pagination::pagination;
use popup::popup;
use search::search;
use table::table;

pub use all::all as render;
