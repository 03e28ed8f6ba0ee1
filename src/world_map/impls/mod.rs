mod ensure_habitable_edge;
mod get_random_edge_index;
mod scatter_obstacles;
