//! Topic tag colour table
//!
//! Tags missing from this table are left off generated pages.

/// Badge colour for a topic tag, if the tag is known
pub fn tag_color(name: &str) -> Option<&'static str> {
    let color = match name {
        // Data structures
        "Array" => "0093dd",
        "String" => "f38ebc",
        "Hash Table" => "e8a500",
        "Linked List" => "f54d27",
        "Stack" => "7fd8a2",
        "Monotonic Stack" => "7fd8a2",
        "Queue" => "64b5f6",
        "Monotonic Queue" => "64b5f6",
        "Heap (Priority Queue)" => "c66fe0",
        "Tree" => "4caf50",
        "Binary Tree" => "4caf50",
        "Binary Search Tree" => "388e3c",
        "Trie" => "ff7043",
        "Graph" => "5c6bc0",
        "Union Find" => "8d6e63",
        "Segment Tree" => "26a69a",
        "Binary Indexed Tree" => "26a69a",
        "Ordered Set" => "78909c",
        "Matrix" => "3f51b5",
        "Doubly-Linked List" => "f54d27",

        // Techniques
        "Two Pointers" => "3b94d9",
        "Sliding Window" => "42a5f5",
        "Prefix Sum" => "00acc1",
        "Binary Search" => "a0522d",
        "Sorting" => "8e44ad",
        "Greedy" => "ec407a",
        "Dynamic Programming" => "c23d3e",
        "Memoization" => "c23d3e",
        "Backtracking" => "ab47bc",
        "Recursion" => "ab47bc",
        "Divide and Conquer" => "7e57c2",
        "Depth-First Search" => "00897b",
        "Breadth-First Search" => "00897b",
        "Topological Sort" => "5e35b1",
        "Shortest Path" => "5e35b1",
        "Bit Manipulation" => "455a64",
        "Bitmask" => "455a64",
        "Simulation" => "9e9d24",
        "Design" => "6d4c41",
        "Iterator" => "6d4c41",
        "Counting" => "f9a825",
        "Enumeration" => "f9a825",
        "Hash Function" => "e8a500",
        "Rolling Hash" => "e8a500",
        "String Matching" => "f38ebc",

        // Math
        "Math" => "795548",
        "Geometry" => "795548",
        "Number Theory" => "795548",
        "Combinatorics" => "795548",
        "Probability and Statistics" => "795548",
        "Game Theory" => "d81b60",
        "Brainteaser" => "d81b60",

        // Other
        "Database" => "0288d1",
        "Shell" => "212121",
        "Concurrency" => "546e7a",
        _ => return None,
    };

    Some(color)
}
