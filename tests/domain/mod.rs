mod storage_path_test;
