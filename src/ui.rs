pub mod document_tree;
