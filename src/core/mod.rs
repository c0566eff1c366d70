pub mod escaper;
