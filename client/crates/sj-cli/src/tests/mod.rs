mod session_file_provider;
