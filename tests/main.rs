use sort_test_tools::{instantiate_partition_tests, instantiate_search_tests, instantiate_sort_tests};

mod bubble {
    use super::*;

    instantiate_sort_tests!(classic_sort_rs::bubble::SortImpl);
}

mod insertion {
    use super::*;

    instantiate_sort_tests!(classic_sort_rs::insertion::SortImpl);
}

mod selection {
    use super::*;

    instantiate_sort_tests!(classic_sort_rs::selection::SortImpl);
}

mod merge {
    use super::*;

    instantiate_sort_tests!(classic_sort_rs::merge::SortImpl);
}

mod quick {
    use super::*;

    instantiate_sort_tests!(classic_sort_rs::quick::SortImpl);
    instantiate_partition_tests!(classic_sort_rs::quick::PartitionImpl);
}

mod binary_search_iterative {
    use super::*;

    instantiate_search_tests!(classic_sort_rs::binary_search::IterativeImpl);
}

mod binary_search_recursive {
    use super::*;

    instantiate_search_tests!(classic_sort_rs::binary_search::RecursiveImpl);
}
