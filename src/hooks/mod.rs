pub mod use_sort;
