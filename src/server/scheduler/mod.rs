pub mod guild_refresh;
