mod test_error;
