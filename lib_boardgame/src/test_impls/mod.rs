pub mod game_state_test_impl;
