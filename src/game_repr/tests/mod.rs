mod game_end;
