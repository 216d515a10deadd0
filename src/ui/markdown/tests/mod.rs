mod helpers;
mod rendering;
